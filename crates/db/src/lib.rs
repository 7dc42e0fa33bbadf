//! Resource store for monitors, users, ping results and status pages.
//!
//! Repositories are zero-sized structs whose async methods take `&PgPool`
//! first. Every query runs under [`QUERY_TIMEOUT`] via [`bounded`].

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{StoreError, StoreResult};

pub type DbPool = sqlx::PgPool;

/// Upper bound on a single store operation.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection pool sizing.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub database_url: String,
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// Idle connections above `min_connections` are closed after this long.
    pub idle_timeout: Duration,
}

/// Create a connection pool from the given settings.
pub async fn create_pool(config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .idle_timeout(config.idle_timeout)
        .acquire_timeout(QUERY_TIMEOUT)
        .connect(&config.database_url)
        .await
}

/// Round-trip a trivial query to verify connectivity.
pub async fn health_check(pool: &DbPool) -> StoreResult<()> {
    bounded(QUERY_TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Await a store future, failing with [`StoreError::Timeout`] after `limit`.
///
/// On timeout the inner future is dropped, which aborts the in-flight query.
pub async fn bounded<T, F>(limit: Duration, fut: F) -> StoreResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => Err(StoreError::Timeout(limit)),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn bounded_times_out_stalled_future() {
        let stalled = std::future::pending::<Result<(), sqlx::Error>>();
        let result = bounded(Duration::from_millis(50), stalled).await;
        assert_matches!(result, Err(StoreError::Timeout(d)) if d == Duration::from_millis(50));
    }

    #[tokio::test]
    async fn bounded_passes_through_success() {
        let result = bounded(QUERY_TIMEOUT, async { Ok::<_, sqlx::Error>(7) }).await;
        assert_matches!(result, Ok(7));
    }

    #[tokio::test]
    async fn bounded_passes_through_database_error() {
        let result = bounded(QUERY_TIMEOUT, async {
            Err::<(), _>(sqlx::Error::PoolTimedOut)
        })
        .await;
        assert_matches!(result, Err(StoreError::Database(sqlx::Error::PoolTimedOut)));
    }
}
