//! Ping result entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uptime_core::types::{DbId, Timestamp};
use validator::Validate;

/// A single probe outcome from the `ping_results` table. Never mutated.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PingResult {
    pub id: DbId,
    pub monitor_id: DbId,
    pub status: String,
    /// Round-trip time in milliseconds.
    pub response_time: i32,
    pub timestamp: Timestamp,
}

/// DTO for recording a ping result.
///
/// `monitor_id` is taken from the URL path when posted through the API.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePingResult {
    #[serde(default)]
    pub monitor_id: DbId,
    #[validate(length(min = 1, max = 32, message = "must be between 1 and 32 characters"))]
    pub status: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub response_time: i32,
    /// Defaults to the insert time when omitted.
    pub timestamp: Option<Timestamp>,
}
