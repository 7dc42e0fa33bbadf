//! Argon2id password hashing.
//!
//! All password hashes use the Argon2id variant with a cryptographically random
//! salt generated via [`OsRng`]. The PHC string format is used for storage so
//! that algorithm parameters and salt are embedded in the hash itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use uptime_core::credential::{PasswordHash, PlainPassword};

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(
    password: &PlainPassword,
) -> Result<PasswordHash, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.expose().as_bytes(), &salt)?;
    Ok(PasswordHash::from(hash.to_string()))
}
