/**
 * Login Handler
 *
 * This module implements the token login handler for
 * POST /api/v1/auth/access-token.
 *
 * # Authentication Process
 *
 * 1. Verify the (email, password) pair against the user store
 * 2. Reject disabled accounts
 * 3. Issue a signed access token with the email as subject
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 400 response
 * - The inactive-account response is deliberately distinct
 * - Passwords are never logged
 */

use axum::{extract::State, response::Json, Form};

use crate::auth::handlers::types::{LoginForm, TokenResponse};
use crate::auth::session::authenticate;
use crate::auth::tokens::create_access_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// Accepts OAuth2 password-grant form fields (`username` = email,
/// `password`) and returns a bearer token on success.
///
/// # Errors
///
/// * `400 Bad Request` - unknown email, wrong password, or inactive account
/// * `500 Internal Server Error` - store failure or signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIs...",
///   "token_type": "bearer"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = match authenticate(&state.pool, &form.username, &form.password).await {
        Ok(user) => user,
        Err(err @ ApiError::InvalidCredentials) => {
            tracing::warn!(email = %form.username, reason = "invalid_credentials", "login_failed");
            return Err(err);
        }
        Err(err @ ApiError::InactiveUser) => {
            tracing::warn!(email = %form.username, reason = "inactive_user", "login_failed");
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    let token = create_access_token(&state.auth, &user.email)
        .map_err(|e| ApiError::Internal(format!("failed to sign access token: {e}")))?;

    tracing::info!(user_id = user.id, email = %user.email, "login_success");

    Ok(Json(TokenResponse::bearer(token)))
}
