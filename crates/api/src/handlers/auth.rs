//! Handlers for the `/auth` resource (registration).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uptime_core::credential::PlainPassword;
use uptime_core::error::CoreError;
use uptime_core::id::generate_id;
use uptime_core::validation::{validate_password_length, validate_username_length};
use uptime_db::models::user::{NewUser, UserResponse};
use uptime_db::repositories::UserRepo;
use validator::{Validate, ValidationErrors};

use crate::auth::password::hash_password;
use crate::error::AppResult;
use crate::middleware::ValidatedJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: PlainPassword,
}

/// Reported errors carry no params, so the submitted password never appears
/// in `ValidationErrors`.
impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_username_length(&self.username) {
            errors.add("username", e);
        }
        if let Err(e) = validate_password_length(&self.password) {
            errors.add("password", e);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Hashes the password off the async runtime; the plaintext is moved into
/// the hashing task and dropped there. A taken username yields 409, either
/// from the lookup here or from `uq_users_username` when two registrations race.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let RegisterRequest { username, password } = input;

    if UserRepo::find_by_username(&state.pool, &username)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict(format!("Username '{username}' is already taken")).into());
    }

    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| CoreError::Internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| CoreError::Internal(format!("Password hashing error: {e}")))?;

    let new_user = NewUser {
        username,
        password_hash,
    };
    let user = UserRepo::create(&state.pool, &generate_id(), &new_user).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok((StatusCode::CREATED, Json(user.into())))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use uptime_core::validation::PayloadValidator;

    use super::*;

    fn request(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: PlainPassword::new(password),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request("operator", "correct-horse").validate().is_ok());
    }

    #[test]
    fn short_password_is_reported_without_its_value() {
        let errors = request("operator", "s3cr").validate().unwrap_err();

        let fields = errors.field_errors();
        let password_errors = fields["password"];
        assert_eq!(password_errors.len(), 1);
        assert!(password_errors[0].params.is_empty());
        assert!(!format!("{errors:?}").contains("s3cr"));
    }

    #[test]
    fn both_fields_are_reported_together() {
        let err = PayloadValidator::new()
            .validate(&request("ab", "s3cr"))
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert_eq!(
                msg,
                "password: must be between 8 and 40 characters; \
                 username: must be between 3 and 40 characters"
            );
        });
    }
}
