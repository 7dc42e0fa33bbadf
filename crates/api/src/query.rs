//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional owner filter (`?user_id=`) for list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct OwnerFilter {
    pub user_id: Option<String>,
}
