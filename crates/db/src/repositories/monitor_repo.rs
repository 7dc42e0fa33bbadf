//! Repository for the `monitors` table.
//!
//! Updates use optimistic concurrency: the write only lands if the stored
//! `version` still equals the version the caller read.

use sqlx::PgPool;
use uptime_core::types::Timestamp;

use crate::error::{require, StoreError, StoreResult};
use crate::models::monitor::{CreateMonitor, Monitor};
use crate::{bounded, QUERY_TIMEOUT};

const ENTITY: &str = "Monitor";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, address, method, kind, config, \"interval\", \
                       version, created_at, updated_at";

/// Provides CRUD and conditional-update operations for monitors.
pub struct MonitorRepo;

impl MonitorRepo {
    /// Insert a new monitor under the caller-supplied `id`, returning the created row.
    pub async fn create(pool: &PgPool, id: &str, input: &CreateMonitor) -> StoreResult<Monitor> {
        let query = format!(
            "INSERT INTO monitors (id, user_id, name, address, \"interval\", method, kind, config)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let monitor = bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, Monitor>(&query)
                .bind(id)
                .bind(&input.user_id)
                .bind(&input.name)
                .bind(&input.address)
                .bind(input.interval)
                .bind(&input.method)
                .bind(&input.kind)
                .bind(&input.config)
                .fetch_one(pool),
        )
        .await?;
        tracing::debug!(monitor_id = %monitor.id, user_id = %monitor.user_id, "Monitor created");
        Ok(monitor)
    }

    /// Find a monitor by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> StoreResult<Monitor> {
        let query = format!("SELECT {COLUMNS} FROM monitors WHERE id = $1");
        let row = bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, Monitor>(&query)
                .bind(id)
                .fetch_optional(pool),
        )
        .await?;
        require(row, ENTITY, id)
    }

    /// List all monitors, oldest first.
    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Monitor>> {
        let query = format!("SELECT {COLUMNS} FROM monitors ORDER BY created_at, id");
        bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, Monitor>(&query).fetch_all(pool),
        )
        .await
    }

    /// List the monitors owned by one user, oldest first.
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> StoreResult<Vec<Monitor>> {
        let query =
            format!("SELECT {COLUMNS} FROM monitors WHERE user_id = $1 ORDER BY created_at, id");
        bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, Monitor>(&query)
                .bind(user_id)
                .fetch_all(pool),
        )
        .await
    }

    /// Write every mutable field of `monitor` if its stored version still
    /// equals `monitor.version`.
    ///
    /// On success the new `version` and `updated_at` are written back into
    /// `monitor`; the caller must not reuse the pre-update copy. Zero matched
    /// rows (stale version or deleted row) yields
    /// [`StoreError::VersionConflict`] and leaves `monitor` unchanged.
    pub async fn update(pool: &PgPool, monitor: &mut Monitor) -> StoreResult<()> {
        let row = bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, (i64, Timestamp)>(
                "UPDATE monitors SET
                    name = $1,
                    address = $2,
                    \"interval\" = $3,
                    method = $4,
                    kind = $5,
                    config = $6,
                    version = version + 1,
                    updated_at = NOW()
                 WHERE id = $7 AND version = $8
                 RETURNING version, updated_at",
            )
            .bind(&monitor.name)
            .bind(&monitor.address)
            .bind(monitor.interval)
            .bind(&monitor.method)
            .bind(&monitor.kind)
            .bind(&monitor.config)
            .bind(&monitor.id)
            .bind(monitor.version)
            .fetch_optional(pool),
        )
        .await?;

        let (version, updated_at) = row.ok_or_else(|| StoreError::VersionConflict {
            entity: ENTITY,
            id: monitor.id.clone(),
            expected_version: monitor.version,
        })?;

        tracing::debug!(
            monitor_id = %monitor.id,
            from_version = monitor.version,
            to_version = version,
            "Monitor updated"
        );
        monitor.version = version;
        monitor.updated_at = updated_at;
        Ok(())
    }

    /// Permanently delete a monitor. Ping results and status page entries
    /// referencing it are left in place.
    pub async fn delete(pool: &PgPool, id: &str) -> StoreResult<()> {
        let result = bounded(
            QUERY_TIMEOUT,
            sqlx::query("DELETE FROM monitors WHERE id = $1")
                .bind(id)
                .execute(pool),
        )
        .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: ENTITY,
                id: id.to_string(),
            });
        }
        tracing::debug!(monitor_id = %id, "Monitor deleted");
        Ok(())
    }
}
