//! Authentication test helpers
//!
//! Utilities for creating test users and issuing tokens that the test
//! server will accept.

use sqlx::PgPool;
use tasktrack::auth::tokens::create_access_token;
use tasktrack::auth::users::{create_user, promote_to_superuser, set_active, User};

use super::test_auth_config;

/// A provisioned test user plus a valid token for it
pub struct TestUser {
    pub user: User,
    pub password: String,
    pub token: String,
}

/// Create an active, non-superuser test user with a working token
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str) -> TestUser {
    let user = create_user(pool, email, password)
        .await
        .expect("failed to create test user");
    let token = create_access_token(&test_auth_config(), &user.email)
        .expect("failed to issue test token");

    TestUser {
        user,
        password: password.to_string(),
        token,
    }
}

/// Create a superuser test user with a working token
pub async fn create_test_superuser(pool: &PgPool, email: &str, password: &str) -> TestUser {
    let mut test_user = create_test_user(pool, email, password).await;
    test_user.user = promote_to_superuser(pool, test_user.user.id)
        .await
        .expect("failed to promote test user")
        .expect("test user vanished");
    test_user
}

/// Deactivate a user directly in the store
pub async fn deactivate_user(pool: &PgPool, user_id: i64) {
    set_active(pool, user_id, false)
        .await
        .expect("failed to deactivate test user")
        .expect("test user vanished");
}

/// Create an `Authorization` header value for a token
pub fn auth_header(token: &str) -> String {
    format!("Bearer {token}")
}
