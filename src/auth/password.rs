/**
 * Password Hashing
 *
 * This module wraps bcrypt for password storage. Each hash call embeds a
 * fresh random salt, so hashing the same password twice yields different
 * digests. Verification reads the salt back out of the stored digest.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::ApiError;

/// Hash a plaintext password with a per-call random salt
///
/// # Errors
///
/// Returns `ApiError::Internal` if bcrypt fails (effectively never for
/// valid UTF-8 input).
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored digest
///
/// Returns `true` iff the password matches. A malformed digest verifies
/// as `false` rather than surfacing an error: from the caller's point of
/// view an unreadable hash is just a failed match.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    verify(password, hashed).unwrap_or(false)
}
