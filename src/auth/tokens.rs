/**
 * Access Token Service
 *
 * This module issues and verifies the stateless JWT bearer tokens used
 * for authentication. Tokens are HS256-signed with the process-wide
 * secret from [`AuthConfig`] and carry the user's email as subject plus
 * issued-at and expiry timestamps. Nothing is stored server-side, so a
 * token cannot be revoked before its natural expiry.
 *
 * # Security
 *
 * - Expiry is checked with zero leeway: `now >= exp` is invalid
 * - Signature failures, malformed tokens, and expired tokens are all
 *   reported as errors, never panics
 * - Password rotation does NOT invalidate outstanding tokens (accepted
 *   gap of the stateless design); deactivation is caught per-request by
 *   the session resolution path instead
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::server::config::AuthConfig;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Seconds since the Unix epoch
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs()
}

/// Create a signed access token for a user
///
/// The expiry is `now + config.token_ttl`.
///
/// # Arguments
///
/// * `config` - Signing secret and TTL, fixed at process start
/// * `email` - The subject the token will assert
///
/// # Returns
///
/// The encoded JWT string
pub fn create_access_token(
    config: &AuthConfig,
    email: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let ttl_seconds = config.token_ttl.num_seconds().max(0) as u64;

    let claims = Claims {
        sub: email.to_string(),
        exp: now + ttl_seconds,
        iat: now,
    };

    let key = EncodingKey::from_secret(config.secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify an access token and return its subject email
///
/// # Errors
///
/// Returns an error if the signature does not verify against the
/// configured secret, the token is malformed, or the token has expired.
/// Expiry is exact: no clock-skew leeway is granted.
pub fn verify_access_token(
    config: &AuthConfig,
    token: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(config.secret.as_ref());
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &key, &validation)?;

    // The library only rejects once `exp < now`; a token is valid
    // strictly before its expiry instant, so `exp == now` is expired too.
    if unix_now() >= token_data.claims.exp {
        return Err(jsonwebtoken::errors::ErrorKind::ExpiredSignature.into());
    }

    Ok(token_data.claims.sub)
}
