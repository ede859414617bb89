//! Routes Module
//!
//! HTTP route configuration for the server.

/// Router assembly
pub mod router;

pub use router::create_router;
