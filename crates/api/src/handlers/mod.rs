pub mod auth;
pub mod monitor;
pub mod ping_result;
pub mod status_page;
pub mod user;
