//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Handlers
//!
//! - **`login`** - POST /api/v1/auth/access-token - token login
//! - **`register`** - POST /api/v1/auth/register - user registration

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Registration handler
pub mod register;

pub use login::login;
pub use register::register;
pub use types::{LoginForm, RegisterRequest, TokenResponse, UserResponse};
