//! JSON body extractor that runs payload validation before the handler.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;

/// A JSON request body that has been deserialized and validated with the
/// [`PayloadValidator`](uptime_core::validation::PayloadValidator) held in
/// [`AppState`].
///
/// Malformed JSON is rejected with 400 `BAD_REQUEST`; rule violations with
/// 400 `VALIDATION_ERROR`.
///
/// ```ignore
/// async fn create(
///     State(state): State<AppState>,
///     ValidatedJson(input): ValidatedJson<CreateMonitor>,
/// ) -> AppResult<Json<Monitor>> { ... }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest<AppState> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        state.validator.validate(&value)?;
        Ok(Self(value))
    }
}
