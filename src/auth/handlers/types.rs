/**
 * Authentication Handler Types
 *
 * Request and response types for the auth endpoints. The login request
 * follows the OAuth2 password-grant form shape (`username` + `password`,
 * where `username` carries the email) so standard token clients work
 * unchanged.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Login form (OAuth2 password-grant shape)
///
/// `username` carries the user's email.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginForm {
    /// User's email address
    pub username: String,
    /// User's password
    pub password: String,
}

/// Token response returned by a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed JWT
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// User response (without sensitive data)
///
/// The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User's unique ID
    pub id: i64,
    /// User's email address
    pub email: String,
    /// Whether the account is active
    pub is_active: bool,
    /// Whether the account is a superuser
    pub is_superuser: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
        }
    }
}
