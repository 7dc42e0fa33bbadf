//! Monitor entity model, DTOs and patch semantics.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uptime_core::types::{DbId, Timestamp};
use uptime_core::validation::{validate_http_method, validate_not_blank};
use validator::Validate;

/// Version assigned to a freshly created monitor.
pub const INITIAL_VERSION: i64 = 0;

/// A monitor row from the `monitors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Monitor {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub address: String,
    /// HTTP verb used for the probe; empty means the prober's default.
    pub method: String,
    pub kind: String,
    /// Opaque probe configuration, stored verbatim.
    pub config: String,
    /// Probe interval in seconds.
    pub interval: i32,
    /// Optimistic concurrency counter, incremented on every successful update.
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new monitor. The id is generated by the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMonitor {
    #[validate(custom(function = "validate_not_blank"))]
    pub user_id: DbId,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(url(message = "must be a valid URL"))]
    pub address: String,
    #[serde(default)]
    #[validate(custom(function = "validate_http_method"))]
    pub method: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub config: String,
    #[validate(range(min = 1, message = "must be greater than 0"))]
    pub interval: i32,
}

/// Partial update for a monitor.
///
/// `None` means the field was absent from the payload and keeps its stored
/// value. `Some("")` is a real value and is written. A JSON `null` is treated
/// as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMonitor {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub address: Option<String>,
    #[validate(custom(function = "validate_http_method"))]
    pub method: Option<String>,
    pub kind: Option<String>,
    pub config: Option<String>,
    #[validate(range(min = 1, message = "must be greater than 0"))]
    pub interval: Option<i32>,
    /// Version the client last read. When present, the write only lands if
    /// the stored version still matches it.
    #[validate(range(min = 0, message = "must not be negative"))]
    pub version: Option<i64>,
}

impl Monitor {
    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    ///
    /// Does not touch `version`; the store bumps it on a successful write.
    /// `patch.version` is an expectation, not a new value, and is ignored here.
    pub fn apply_patch(&mut self, patch: UpdateMonitor) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(method) = patch.method {
            self.method = method;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(config) = patch.config {
            self.config = config;
        }
        if let Some(interval) = patch.interval {
            self.interval = interval;
        }
    }
}
