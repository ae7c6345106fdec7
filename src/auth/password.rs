use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::RngCore;
use std::sync::OnceLock;

use crate::error::AppError;

const SALT_SIZE: usize = 16;

/// Hashes `password` with Argon2id and a fresh random salt, returning a PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; SALT_SIZE];
    rand::thread_rng().fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::InternalError(format!("Salt encoding failed: {}", e)))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC string. The digest comparison is
/// constant-time. A malformed stored hash never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            false
        }
    }
}

/// Burns one verification so lookups of unknown emails cost about as much as
/// real ones.
pub fn verify_against_dummy(password: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
    let dummy = DUMMY_HASH.get_or_init(|| hash_password("dummy-password-for-timing").ok());
    if let Some(hash) = dummy {
        let _ = verify_password(password, hash);
    }
}
