//! Domain primitives shared by the store and the HTTP layer.
//!
//! Nothing in this crate performs I/O.

pub mod credential;
pub mod error;
pub mod id;
pub mod types;
pub mod validation;
