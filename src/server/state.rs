/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * There is no shared mutable in-memory state across requests: `AppState`
 * holds only the connection pool (internally synchronized by sqlx) and
 * the immutable token configuration. Request handlers never take locks.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::server::config::AuthConfig;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `pool` - PostgreSQL connection pool
/// * `auth` - Immutable token signing configuration
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,

    /// Token signing configuration, fixed at process start
    pub auth: AuthConfig,
}

/// Allow handlers to extract the pool directly with `State(PgPool)`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow handlers to extract the token configuration directly
impl FromRef<AppState> for AuthConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
