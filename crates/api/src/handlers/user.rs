//! Handlers for the `/users` resource. Responses never include the hash.

use axum::extract::{Path, State};
use axum::Json;
use uptime_core::types::DbId;
use uptime_db::models::user::UserResponse;
use uptime_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, &id).await?;
    Ok(Json(user.into()))
}
