//! Route definitions for the `/status-pages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::status_page;
use crate::state::AppState;

/// Routes mounted at `/status-pages`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(status_page::list).post(status_page::create))
        .route("/{id}", get(status_page::get_by_id))
}
