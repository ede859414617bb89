//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Configuration loading (database, tokens, port)
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env()` reads all
//!    settings once into immutable structs
//! 2. **Pool + Migrations**: `create_app` connects to PostgreSQL and runs
//!    migrations; failure here aborts startup
//! 3. **Router Creation**: all routes and middleware are configured

/// Configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{AppConfig, AuthConfig};
pub use init::create_app;
pub use state::AppState;
