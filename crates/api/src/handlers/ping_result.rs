//! Handlers for ping results, nested under monitors:
//! `/monitors/{monitor_id}/pings`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uptime_core::id::generate_id;
use uptime_core::types::DbId;
use uptime_db::models::ping_result::{CreatePingResult, PingResult};
use uptime_db::repositories::{MonitorRepo, PingResultRepo};

use crate::error::AppResult;
use crate::middleware::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/monitors/{monitor_id}/pings
///
/// Overrides `input.monitor_id` with the value from the URL path. The
/// monitor must exist at the time of recording.
pub async fn create(
    State(state): State<AppState>,
    Path(monitor_id): Path<DbId>,
    ValidatedJson(mut input): ValidatedJson<CreatePingResult>,
) -> AppResult<(StatusCode, Json<PingResult>)> {
    MonitorRepo::find_by_id(&state.pool, &monitor_id).await?;
    input.monitor_id = monitor_id;
    let result = PingResultRepo::create(&state.pool, &generate_id(), &input).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// GET /api/v1/monitors/{monitor_id}/pings
pub async fn list_by_monitor(
    State(state): State<AppState>,
    Path(monitor_id): Path<DbId>,
) -> AppResult<Json<Vec<PingResult>>> {
    let results = PingResultRepo::list_by_monitor(&state.pool, &monitor_id).await?;
    Ok(Json(results))
}
