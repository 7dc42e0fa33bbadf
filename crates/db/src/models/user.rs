//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use uptime_core::credential::PasswordHash;
use uptime_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Carries the password hash and is deliberately not `Serialize`.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    #[sqlx(try_from = "String")]
    pub password_hash: PasswordHash,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Insert data for a new user. Only the hash is ever handed to the store.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub password_hash: PasswordHash,
}
