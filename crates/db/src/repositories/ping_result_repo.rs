//! Repository for the `ping_results` table.

use sqlx::PgPool;

use crate::error::{require, StoreResult};
use crate::models::ping_result::{CreatePingResult, PingResult};
use crate::{bounded, QUERY_TIMEOUT};

const ENTITY: &str = "PingResult";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, monitor_id, status, response_time, \"timestamp\"";

/// Provides insert and read operations for ping results.
pub struct PingResultRepo;

impl PingResultRepo {
    /// Record a ping result under the caller-supplied `id`.
    ///
    /// The timestamp defaults to `NOW()` when `input.timestamp` is `None`.
    pub async fn create(
        pool: &PgPool,
        id: &str,
        input: &CreatePingResult,
    ) -> StoreResult<PingResult> {
        let query = format!(
            "INSERT INTO ping_results (id, monitor_id, status, response_time, \"timestamp\")
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
             RETURNING {COLUMNS}"
        );
        let result = bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, PingResult>(&query)
                .bind(id)
                .bind(&input.monitor_id)
                .bind(&input.status)
                .bind(input.response_time)
                .bind(input.timestamp)
                .fetch_one(pool),
        )
        .await?;
        tracing::debug!(
            ping_result_id = %result.id,
            monitor_id = %result.monitor_id,
            status = %result.status,
            "Ping result recorded"
        );
        Ok(result)
    }

    /// Find a ping result by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> StoreResult<PingResult> {
        let query = format!("SELECT {COLUMNS} FROM ping_results WHERE id = $1");
        let row = bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, PingResult>(&query)
                .bind(id)
                .fetch_optional(pool),
        )
        .await?;
        require(row, ENTITY, id)
    }

    /// List all ping results, oldest first.
    pub async fn list(pool: &PgPool) -> StoreResult<Vec<PingResult>> {
        let query = format!("SELECT {COLUMNS} FROM ping_results ORDER BY \"timestamp\", id");
        bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, PingResult>(&query).fetch_all(pool),
        )
        .await
    }

    /// List the results recorded for one monitor, newest first.
    pub async fn list_by_monitor(pool: &PgPool, monitor_id: &str) -> StoreResult<Vec<PingResult>> {
        let query = format!(
            "SELECT {COLUMNS} FROM ping_results
             WHERE monitor_id = $1
             ORDER BY \"timestamp\" DESC, id"
        );
        bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, PingResult>(&query)
                .bind(monitor_id)
                .fetch_all(pool),
        )
        .await
    }
}
