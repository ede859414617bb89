//! Shared test fixtures and helpers
//!
//! Provides the test database fixture, a test server factory, and auth
//! helpers used by the integration test suites.

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;
use sqlx::PgPool;
use tasktrack::routes::create_router;
use tasktrack::server::{AppState, AuthConfig};

/// Signing secret shared by the test server and the token helpers
pub const TEST_SECRET: &str = "integration-test-secret";

/// Token configuration matching the test server
pub fn test_auth_config() -> AuthConfig {
    AuthConfig::new(TEST_SECRET, 30)
}

/// Build a test server around the full router with the given pool
pub fn test_app(pool: PgPool) -> TestServer {
    let app = create_router(AppState {
        pool,
        auth: test_auth_config(),
    });
    TestServer::new(app).expect("failed to start test server")
}
