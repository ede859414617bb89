/**
 * API Error Types
 *
 * This module defines the error taxonomy for the API. Handlers return
 * these values instead of raising status codes deep inside business
 * logic; the conversion module maps each variant to an HTTP response.
 *
 * # Error Categories
 *
 * ## Authentication errors
 *
 * - `InvalidCredentials` - unknown email OR wrong password (deliberately
 *   the same variant for both, so login failures never reveal whether an
 *   email is registered)
 * - `InactiveUser` - correct credentials but the account is disabled
 * - `Unauthenticated` - missing, malformed, or expired bearer token, or
 *   a token whose subject no longer exists or is no longer active
 *
 * ## Authorization and resource errors
 *
 * - `Forbidden` - authenticated but neither owner nor superuser
 * - `NotFound` - the requested resource id does not exist
 * - `DuplicateEmail` - registration collision
 *
 * ## Server errors
 *
 * - `Database` - persistence-layer failure; surfaced as a generic 500
 * - `Internal` - hashing or token-signing failure; also a generic 500
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error taxonomy
///
/// All terminal, user-visible outcomes of a request. None of these are
/// retried internally; each maps to exactly one HTTP status code via
/// [`ApiError::status_code`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown email or wrong password.
    ///
    /// Both cases share this variant so the response cannot be used for
    /// email enumeration.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Correct credentials, but the account is disabled.
    #[error("Inactive user")]
    InactiveUser,

    /// Registration attempted with an email that is already taken.
    #[error("The user with this email already exists in the system")]
    DuplicateEmail,

    /// Missing, malformed, or expired bearer token, or the token subject
    /// no longer resolves to an active user.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Authenticated, but not the owner of the resource and not a superuser.
    #[error("Not enough permissions")]
    Forbidden,

    /// The requested resource does not exist.
    #[error("Task not found")]
    NotFound,

    /// Request payload failed validation.
    #[error("{0}")]
    Validation(String),

    /// Persistence-layer failure. Not masked, not retried; surfaced as a
    /// generic server error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Hashing or token-signing failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidCredentials`, `InactiveUser`, `DuplicateEmail`,
    ///   `Forbidden`, `Validation` - 400 Bad Request
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Database`, `Internal` - 500 Internal Server Error
    ///
    /// `Forbidden` mapping to 400 rather than 403 is intentional: it
    /// preserves the wire behavior the frontend was built against.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials
            | Self::InactiveUser
            | Self::DuplicateEmail
            | Self::Forbidden
            | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message
    ///
    /// Server-side failures (`Database`, `Internal`) are collapsed to a
    /// generic message; their details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_errors_map_to_bad_request() {
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InactiveUser.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::DuplicateEmail.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_forbidden_maps_to_bad_request() {
        // 400, not 403: preserved wire behavior
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthenticated_maps_to_unauthorized() {
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_server_errors_map_to_internal_server_error() {
        let db_err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(db_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let internal = ApiError::Internal("hashing failed".to_string());
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_server_errors_do_not_leak_details() {
        let db_err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(db_err.message(), "Internal server error");
        let internal = ApiError::Internal("bcrypt exploded".to_string());
        assert_eq!(internal.message(), "Internal server error");
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // Same message regardless of whether the email existed
        assert_eq!(
            ApiError::InvalidCredentials.message(),
            "Incorrect email or password"
        );
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: ApiError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, ApiError::Database(_)));
    }
}
