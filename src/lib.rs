//! TaskTrack Library
//!
//! This crate implements a multi-tenant task-tracking REST API. Users
//! register and authenticate with email + password, receive a stateless
//! JWT bearer token, and manage their own task records. Superusers can
//! see and delete every task regardless of ownership.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration loading, application state, app assembly
//! - **`routes`** - HTTP route configuration
//! - **`auth`** - Password hashing, user store, JWT tokens, session resolution
//! - **`tasks`** - Task store, ownership checks, task handlers
//! - **`middleware`** - Request logging middleware
//! - **`error`** - API error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs          - Module exports and documentation
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and user management
//! ├── tasks/          - Task CRUD and access control
//! ├── middleware/     - Request processing middleware
//! └── error/          - Error types
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: POST /api/v1/auth/register with email + password
//! 2. **Login**: POST /api/v1/auth/access-token with form credentials → JWT
//! 3. **Requests**: every task operation presents `Authorization: Bearer <jwt>`;
//!    the handler resolves the token back to a live, active user before
//!    touching any task row
//!
//! # Error Handling
//!
//! All user-visible failures are expressed as [`error::ApiError`] values
//! returned from handlers; only the HTTP boundary translates them into
//! status codes. Database errors propagate as generic server errors.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Task storage and access control
pub mod tasks;

/// Middleware for request processing
pub mod middleware;

/// API error types
pub mod error;

pub use error::ApiError;
pub use server::create_app;
