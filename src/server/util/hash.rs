use sha2::{Digest, Sha256};

/// Hashes a password for storage.
///
/// Only used for the seeded default admin account; interactive
/// authentication lives outside this service.
///
/// # Arguments
/// - `password` - Plain-text password
///
/// # Returns
/// - `String` - Lowercase hex digest
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}
