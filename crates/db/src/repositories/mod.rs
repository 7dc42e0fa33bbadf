//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and return [`crate::StoreResult`].

pub mod monitor_repo;
pub mod ping_result_repo;
pub mod status_page_repo;
pub mod user_repo;

pub use monitor_repo::MonitorRepo;
pub use ping_result_repo::PingResultRepo;
pub use status_page_repo::StatusPageRepo;
pub use user_repo::UserRepo;
