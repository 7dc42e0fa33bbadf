use std::sync::Arc;

use uptime_core::validation::PayloadValidator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: uptime_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Payload validator used by [`crate::middleware::ValidatedJson`].
    pub validator: PayloadValidator,
}
