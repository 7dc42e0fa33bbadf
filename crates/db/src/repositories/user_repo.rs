//! Repository for the `users` table.

use sqlx::PgPool;

use crate::error::{require, StoreResult};
use crate::models::user::{NewUser, User};
use crate::{bounded, QUERY_TIMEOUT};

const ENTITY: &str = "User";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, created_at, updated_at";

/// Provides create and lookup operations for users. Users are immutable
/// once registered.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user under the caller-supplied `id`, returning the created row.
    ///
    /// A taken username violates `uq_users_username`.
    pub async fn create(pool: &PgPool, id: &str, input: &NewUser) -> StoreResult<User> {
        let query = format!(
            "INSERT INTO users (id, username, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let user = bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, User>(&query)
                .bind(id)
                .bind(&input.username)
                .bind(input.password_hash.as_str())
                .fetch_one(pool),
        )
        .await?;
        tracing::debug!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> StoreResult<User> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        let row = bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, User>(&query).bind(id).fetch_optional(pool),
        )
        .await?;
        require(row, ENTITY, id)
    }

    /// Find a user by username (case-sensitive). Returns `None` when no user
    /// has that name.
    pub async fn find_by_username(pool: &PgPool, username: &str) -> StoreResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, User>(&query)
                .bind(username)
                .fetch_optional(pool),
        )
        .await
    }

    /// List all users, oldest first.
    pub async fn list(pool: &PgPool) -> StoreResult<Vec<User>> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at, id");
        bounded(QUERY_TIMEOUT, sqlx::query_as::<_, User>(&query).fetch_all(pool)).await
    }
}
