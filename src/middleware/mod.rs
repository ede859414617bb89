//! Middleware Module
//!
//! HTTP middleware for the server. Authentication is deliberately NOT a
//! middleware here: protected handlers resolve their own bearer token
//! explicitly (see [`crate::auth::session`]), so this module only carries
//! cross-cutting request logging.

/// Request logging middleware
pub mod logging;

pub use logging::logging_middleware;
