use std::time::Duration;

use uptime_core::types::DbId;

/// Outcome classification for store operations.
///
/// `NotFound` and `VersionConflict` are domain signals; every other backend
/// failure (connectivity, constraint violation, decode) is `Database`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A conditional update matched zero rows: the row was modified by
    /// another writer since it was read, or it no longer exists.
    #[error("{entity} {id} was modified concurrently (expected version {expected_version})")]
    VersionConflict {
        entity: &'static str,
        id: DbId,
        expected_version: i64,
    },

    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Convert an `Option` row into a `NotFound` error when absent.
pub(crate) fn require<T>(row: Option<T>, entity: &'static str, id: &str) -> StoreResult<T> {
    row.ok_or_else(|| StoreError::NotFound {
        entity,
        id: id.to_string(),
    })
}
