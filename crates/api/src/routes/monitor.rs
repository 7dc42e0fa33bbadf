//! Route definitions for the `/monitors` resource.
//!
//! Also nests ping results under `/monitors/{monitor_id}/pings`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{monitor, ping_result};
use crate::state::AppState;

/// Routes mounted at `/monitors`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PATCH  /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{monitor_id}/pings                -> list_by_monitor
/// POST   /{monitor_id}/pings                -> create
/// ```
pub fn router() -> Router<AppState> {
    let ping_routes = Router::new().route(
        "/",
        get(ping_result::list_by_monitor).post(ping_result::create),
    );

    Router::new()
        .route("/", get(monitor::list).post(monitor::create))
        .route(
            "/{id}",
            get(monitor::get_by_id)
                .patch(monitor::update)
                .delete(monitor::delete),
        )
        .nest("/{monitor_id}/pings", ping_routes)
}
