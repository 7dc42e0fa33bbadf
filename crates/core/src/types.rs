/// Entity identifiers are URL-safe random strings produced by [`crate::id::generate_id`].
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
