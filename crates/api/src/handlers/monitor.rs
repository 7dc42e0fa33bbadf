//! Handlers for the `/monitors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uptime_core::id::generate_id;
use uptime_core::types::DbId;
use uptime_db::models::monitor::{CreateMonitor, Monitor, UpdateMonitor};
use uptime_db::repositories::MonitorRepo;

use crate::error::AppResult;
use crate::middleware::ValidatedJson;
use crate::query::OwnerFilter;
use crate::state::AppState;

/// POST /api/v1/monitors
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMonitor>,
) -> AppResult<(StatusCode, Json<Monitor>)> {
    let monitor = MonitorRepo::create(&state.pool, &generate_id(), &input).await?;
    Ok((StatusCode::CREATED, Json(monitor)))
}

/// GET /api/v1/monitors[?user_id=]
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<OwnerFilter>,
) -> AppResult<Json<Vec<Monitor>>> {
    let monitors = match filter.user_id {
        Some(user_id) => MonitorRepo::list_by_user(&state.pool, &user_id).await?,
        None => MonitorRepo::list(&state.pool).await?,
    };
    Ok(Json(monitors))
}

/// GET /api/v1/monitors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Monitor>> {
    let monitor = MonitorRepo::find_by_id(&state.pool, &id).await?;
    Ok(Json(monitor))
}

/// PATCH /api/v1/monitors/{id}
///
/// Reads the current row, applies the fields present in the payload and
/// writes back conditionally on the version that was read (or on the
/// `version` the client sent). A concurrent writer that got there first
/// turns this into 409; the client should re-read and retry.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(patch): ValidatedJson<UpdateMonitor>,
) -> AppResult<Json<Monitor>> {
    let mut monitor = MonitorRepo::find_by_id(&state.pool, &id).await?;
    let expected_version = patch.version;
    monitor.apply_patch(patch);
    if let Some(version) = expected_version {
        monitor.version = version;
    }
    MonitorRepo::update(&state.pool, &mut monitor).await?;
    Ok(Json(monitor))
}

/// DELETE /api/v1/monitors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    MonitorRepo::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
