//! Tasks Module
//!
//! Task storage, ownership-based access control, and the task HTTP
//! handlers.
//!
//! # Module Structure
//!
//! ```text
//! tasks/
//! ├── mod.rs          - Module exports and documentation
//! ├── db.rs           - Task model and database operations
//! ├── access.rs       - Ownership/superuser authorization rule
//! └── handlers.rs     - HTTP handlers for task endpoints
//! ```

/// Task model and database operations
pub mod db;

/// Ownership-based access control
pub mod access;

/// HTTP handlers for task endpoints
pub mod handlers;

pub use access::can_read_or_delete;
pub use db::Task;
