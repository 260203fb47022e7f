//! Password hashing
//!
//! Argon2id with default parameters and a random salt per hash. The
//! resulting PHC string embeds the salt and work factors, so verification
//! needs no side channel.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::AccountError;

/// Hash a password for storage
pub fn hash(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::Internal(format!("password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// Returns `Ok(false)` on mismatch; errors are reserved for malformed
/// stored hashes.
pub fn verify(password: &str, stored_hash: &str) -> Result<bool, AccountError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AccountError::Internal(format!("malformed password hash: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AccountError::Internal(format!(
            "password verification failed: {e}"
        ))),
    }
}
