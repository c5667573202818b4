//! Password hashing with bcrypt.

use tracing::warn;

/// Bcrypt cost factor. Debug builds use the minimum so tests stay fast.
pub const HASH_COST: u32 = if cfg!(debug_assertions) { 4 } else { 10 };

/// Hash a plain-text password.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    bcrypt::hash(password, HASH_COST).map_err(PasswordError::Hash)
}

/// Verify a plain-text password against a bcrypt hash.
///
/// A malformed hash never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(matches) => matches,
        Err(e) => {
            warn!(error = %e, "Stored password hash is not a valid bcrypt hash");
            false
        }
    }
}

/// Errors that can occur while hashing passwords.
#[derive(Debug)]
pub enum PasswordError {
    Hash(bcrypt::BcryptError),
}

impl std::fmt::Display for PasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordError::Hash(e) => write!(f, "Failed to hash password: {}", e),
        }
    }
}

impl std::error::Error for PasswordError {}
