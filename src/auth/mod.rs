//! Authentication Module
//!
//! This module handles user authentication, registration, and session
//! resolution. It provides the password hashing and token primitives,
//! the user store, and the HTTP handlers for the auth endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing and verification
//! ├── users.rs        - User model and database operations
//! ├── tokens.rs       - JWT issuance and verification
//! ├── session.rs      - Credential verification and token resolution
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - Token login handler
//!     └── register.rs - User registration handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → user created (active, non-super)
//! 2. **Login**: form credentials verified → JWT with email subject
//! 3. **Per request**: bearer token → subject email → fresh user lookup
//!    with active re-check
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed with per-call salts before storage
//! - Tokens are stateless HS256 JWTs; default TTL 30 minutes, zero
//!   expiry leeway
//! - Login failures for unknown email and wrong password are
//!   indistinguishable

/// Password hashing and verification
pub mod password;

/// User model and database operations
pub mod users;

/// JWT token issuance and verification
pub mod tokens;

/// Credential verification and session resolution
pub mod session;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use session::{authenticate, bearer_token, current_user, resolve_token};
pub use users::User;
