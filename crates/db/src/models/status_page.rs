//! Status page entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uptime_core::types::{DbId, Timestamp};
use uptime_core::validation::{validate_not_blank, validate_slug};
use validator::Validate;

/// A status page row from the `status_pages` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct StatusPage {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    /// Unique per owning user.
    pub slug: String,
    /// Monitors in display order. Existence is not checked.
    pub monitor_ids: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a status page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStatusPage {
    #[validate(custom(function = "validate_not_blank"))]
    pub user_id: DbId,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "validate_slug")
    )]
    pub slug: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "must list at most 100 monitors"))]
    pub monitor_ids: Vec<DbId>,
}

/// Drop repeated ids, keeping the first occurrence of each.
pub fn dedup_monitor_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut out: Vec<DbId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(id.clone());
        }
    }
    out
}
