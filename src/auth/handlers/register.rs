/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/v1/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate the payload (plausible email, non-empty password)
 * 2. Check whether the email is already registered
 * 3. Hash the password and create the user
 * 4. Return the created user without its password hash
 *
 * The pre-check in step 2 gives a clean error for the common case; the
 * database unique constraint still backstops concurrent registrations,
 * so the race loser also receives the duplicate-email error.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Registration handler
///
/// Creates a new active, non-superuser account.
///
/// # Errors
///
/// * `400 Bad Request` - invalid payload or email already registered
/// * `500 Internal Server Error` - store or hashing failure
///
/// # Example Request
///
/// ```json
/// { "email": "user@example.com", "password": "securepassword123" }
/// ```
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if !request.email.contains('@') {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }
    if request.password.is_empty() {
        return Err(ApiError::Validation("Password must not be empty".to_string()));
    }

    if get_user_by_email(&state.pool, &request.email).await?.is_some() {
        tracing::warn!(email = %request.email, reason = "email_exists", "registration_failed");
        return Err(ApiError::DuplicateEmail);
    }

    let user = create_user(&state.pool, &request.email, &request.password).await?;

    tracing::info!(user_id = user.id, email = %user.email, "user_registered");

    Ok(Json(UserResponse::from(user)))
}
