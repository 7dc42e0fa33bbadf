//! Client-visible identifier generation.
//!
//! Ids are generated in-process and passed to the store on insert.

use rand::Rng;

use crate::types::DbId;

/// URL-safe alphabet (64 symbols, same set as nanoid).
pub const ID_ALPHABET: &[u8; 64] =
    b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in a generated identifier (~126 bits of entropy).
pub const ID_LENGTH: usize = 21;

/// Generate a new random identifier.
pub fn generate_id() -> DbId {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect()
}
