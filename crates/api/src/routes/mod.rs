pub mod auth;
pub mod health;
pub mod monitor;
pub mod status_page;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                      service and database health
///
/// /auth/register                               register (POST)
///
/// /users                                       list
/// /users/{id}                                  get
///
/// /monitors                                    list, create
/// /monitors/{id}                               get, partial update (PATCH), delete
/// /monitors/{monitor_id}/pings                 list, record
///
/// /status-pages                                list, create
/// /status-pages/{id}                           get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .nest("/monitors", monitor::router())
        .nest("/status-pages", status_page::router())
}
