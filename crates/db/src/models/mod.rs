//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - For monitors, an update DTO (all `Option` fields) for patches

pub mod monitor;
pub mod ping_result;
pub mod status_page;
pub mod user;
