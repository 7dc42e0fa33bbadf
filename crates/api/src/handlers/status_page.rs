//! Handlers for the `/status-pages` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uptime_core::error::CoreError;
use uptime_core::id::generate_id;
use uptime_core::types::DbId;
use uptime_db::models::status_page::{CreateStatusPage, StatusPage};
use uptime_db::repositories::StatusPageRepo;

use crate::error::AppResult;
use crate::middleware::ValidatedJson;
use crate::query::OwnerFilter;
use crate::state::AppState;

/// POST /api/v1/status-pages
///
/// Slugs are unique per owner; a taken slug yields 409.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStatusPage>,
) -> AppResult<(StatusCode, Json<StatusPage>)> {
    if StatusPageRepo::find_by_slug(&state.pool, &input.user_id, &input.slug)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict(format!(
            "Status page slug '{}' is already in use",
            input.slug
        ))
        .into());
    }
    let page = StatusPageRepo::create(&state.pool, &generate_id(), &input).await?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// GET /api/v1/status-pages[?user_id=]
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<OwnerFilter>,
) -> AppResult<Json<Vec<StatusPage>>> {
    let pages = match filter.user_id {
        Some(user_id) => StatusPageRepo::list_by_user(&state.pool, &user_id).await?,
        None => StatusPageRepo::list(&state.pool).await?,
    };
    Ok(Json(pages))
}

/// GET /api/v1/status-pages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusPage>> {
    let page = StatusPageRepo::find_by_id(&state.pool, &id).await?;
    Ok(Json(page))
}
