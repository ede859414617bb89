//! API Error Module
//!
//! This module defines the error taxonomy shared by all handlers and the
//! conversion of those errors into HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and status mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Error Types
//!
//! Every user-visible failure is one of the [`ApiError`] variants. Business
//! logic returns these as plain values; only the HTTP boundary (the
//! `IntoResponse` impl) translates them into status codes and JSON bodies.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
