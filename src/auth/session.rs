/**
 * Credential Verification and Session Resolution
 *
 * This module turns credentials into identities, in both directions:
 *
 * - [`authenticate`] takes an (email, password) pair and produces the
 *   matching user record, for login
 * - [`resolve_token`] takes a bearer token from an inbound request and
 *   produces the live user record it belongs to, for every protected
 *   operation
 *
 * Handlers call these explicitly and thread the resulting [`User`] into
 * their store calls; there is no extractor or middleware injecting the
 * current user behind the scenes.
 *
 * # Security
 *
 * - Unknown email and wrong password fail with the same error, so login
 *   responses cannot be used to enumerate registered addresses. The
 *   inactive-account case is deliberately more specific.
 * - `resolve_token` re-reads the user row on every request. A user
 *   deactivated (or deleted) after a token was issued is rejected
 *   immediately, without waiting for the token to expire.
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sqlx::PgPool;

use crate::auth::password::verify_password;
use crate::auth::tokens::verify_access_token;
use crate::auth::users::{get_user_by_email, User};
use crate::error::ApiError;
use crate::server::config::AuthConfig;
use crate::server::state::AppState;

/// Verify an (email, password) pair against the user store
///
/// # Errors
///
/// * `ApiError::InvalidCredentials` - unknown email OR wrong password
///   (indistinguishable by design)
/// * `ApiError::InactiveUser` - correct credentials, disabled account
/// * `ApiError::Database` - store failure
///
/// This function has no side effects beyond the lookup: there is no
/// failed-attempt counter and no lockout policy.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> Result<User, ApiError> {
    let user = get_user_by_email(pool, email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(password, &user.hashed_password) {
        return Err(ApiError::InvalidCredentials);
    }

    if !user.is_active {
        return Err(ApiError::InactiveUser);
    }

    Ok(user)
}

/// Extract the bearer token from an `Authorization` header
///
/// # Errors
///
/// Returns `ApiError::Unauthenticated` if the header is missing, is not
/// valid ASCII, or does not use the `Bearer ` scheme.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Unauthenticated)?;

    value.strip_prefix("Bearer ").ok_or(ApiError::Unauthenticated)
}

/// Resolve a bearer token back to a live, active user record
///
/// Verifies the token, then performs a fresh store lookup of the subject
/// email. The lookup guards against subjects that were deleted after the
/// token was issued, and the active re-check makes deactivation take
/// effect on the very next request.
///
/// # Errors
///
/// * `ApiError::Unauthenticated` - invalid/expired token, unknown
///   subject, or inactive subject
/// * `ApiError::Database` - store failure
pub async fn resolve_token(
    pool: &PgPool,
    config: &AuthConfig,
    token: &str,
) -> Result<User, ApiError> {
    let email = verify_access_token(config, token).map_err(|e| {
        tracing::debug!(error = %e, "token verification failed");
        ApiError::Unauthenticated
    })?;

    let user = get_user_by_email(pool, &email)
        .await?
        .ok_or(ApiError::Unauthenticated)?;

    if !user.is_active {
        return Err(ApiError::Unauthenticated);
    }

    Ok(user)
}

/// Resolve the current user for a protected request
///
/// Convenience composition of [`bearer_token`] and [`resolve_token`];
/// protected handlers call this first and thread the returned user into
/// their store and access-control calls.
pub async fn current_user(state: &AppState, headers: &HeaderMap) -> Result<User, ApiError> {
    let token = bearer_token(headers)?;
    resolve_token(&state.pool, &state.auth, token).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_rejected() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(ApiError::Unauthenticated)
        ));
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));
        assert!(matches!(
            bearer_token(&headers),
            Err(ApiError::Unauthenticated)
        ));
    }

    #[test]
    fn test_bare_token_without_scheme_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("abc.def.ghi"));
        assert!(matches!(
            bearer_token(&headers),
            Err(ApiError::Unauthenticated)
        ));
    }
}
