//! Authentication API integration tests
//!
//! Exercise registration, login, and token resolution through the full
//! router. These tests need a reachable Postgres (set `DATABASE_URL`),
//! so they are ignored by default:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test -- --ignored
//! ```

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use common::auth_helpers::{auth_header, create_test_user, deactivate_user};
use common::database::TestDatabase;
use common::test_app;
use tasktrack::auth::users::get_user_by_id;

fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(&auth_header(token)).unwrap(),
    )
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_register_success() {
    let db = TestDatabase::new().await;
    let server = test_app(db.pool().clone());

    let response = server
        .post("/api/v1/auth/register")
        .json(&serde_json::json!({
            "email": "new@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "new@example.com");
    assert_eq!(body["is_active"], true);
    assert_eq!(body["is_superuser"], false);
    assert!(body.get("hashed_password").is_none());
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_registered_user_retrievable_by_id() {
    let db = TestDatabase::new().await;
    let server = test_app(db.pool().clone());

    let response = server
        .post("/api/v1/auth/register")
        .json(&serde_json::json!({
            "email": "byid@example.com",
            "password": "password123"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let id = body["id"].as_i64().unwrap();

    let user = get_user_by_id(db.pool(), id)
        .await
        .unwrap()
        .expect("registered user must be retrievable by id");
    assert_eq!(user.email, "byid@example.com");
    assert!(user.is_active);
    assert!(!user.is_superuser);
    // Stored hashed, never as the plaintext
    assert_ne!(user.hashed_password, "password123");

    // Unknown ids resolve to nothing rather than an error
    assert!(get_user_by_id(db.pool(), id + 1).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_register_duplicate_email() {
    let db = TestDatabase::new().await;
    let server = test_app(db.pool().clone());

    let payload = serde_json::json!({
        "email": "dup@example.com",
        "password": "password123"
    });

    let first = server.post("/api/v1/auth/register").json(&payload).await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = server.post("/api/v1/auth/register").json(&payload).await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);

    // Exactly one row survives the collision
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = 'dup@example.com'")
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_register_invalid_email() {
    let db = TestDatabase::new().await;
    let server = test_app(db.pool().clone());

    let response = server
        .post("/api/v1/auth/register")
        .json(&serde_json::json!({
            "email": "not-an-email",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_login_success() {
    let db = TestDatabase::new().await;
    let server = test_app(db.pool().clone());
    create_test_user(db.pool(), "a@x.com", "pw1").await;

    let response = server
        .post("/api/v1/auth/access-token")
        .form(&[("username", "a@x.com"), ("password", "pw1")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["token_type"], "bearer");
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_login_failures_are_indistinguishable() {
    let db = TestDatabase::new().await;
    let server = test_app(db.pool().clone());
    create_test_user(db.pool(), "a@x.com", "pw1").await;

    let wrong_password = server
        .post("/api/v1/auth/access-token")
        .form(&[("username", "a@x.com"), ("password", "wrong")])
        .await;
    let unknown_email = server
        .post("/api/v1/auth/access-token")
        .form(&[("username", "ghost@x.com"), ("password", "pw1")])
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status_code(), StatusCode::BAD_REQUEST);

    // Same body either way: no email enumeration
    let wrong_body: serde_json::Value = wrong_password.json();
    let unknown_body: serde_json::Value = unknown_email.json();
    assert_eq!(wrong_body["error"], unknown_body["error"]);
    assert_eq!(wrong_body["error"], "Incorrect email or password");
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_login_inactive_user() {
    let db = TestDatabase::new().await;
    let server = test_app(db.pool().clone());
    let user = create_test_user(db.pool(), "a@x.com", "pw1").await;
    deactivate_user(db.pool(), user.user.id).await;

    let response = server
        .post("/api/v1/auth/access-token")
        .form(&[("username", "a@x.com"), ("password", "pw1")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Inactive user");
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_protected_route_without_token() {
    let db = TestDatabase::new().await;
    let server = test_app(db.pool().clone());

    let response = server.get("/api/v1/tasks").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_protected_route_with_garbage_token() {
    let db = TestDatabase::new().await;
    let server = test_app(db.pool().clone());

    let (name, value) = bearer("not.a.valid.token");
    let response = server.get("/api/v1/tasks").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_deactivation_rejects_unexpired_token() {
    let db = TestDatabase::new().await;
    let server = test_app(db.pool().clone());
    let user = create_test_user(db.pool(), "a@x.com", "pw1").await;

    // Token works while the account is active
    let (name, value) = bearer(&user.token);
    let before = server
        .get("/api/v1/tasks")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(before.status_code(), StatusCode::OK);

    // Deactivation takes effect on the very next request, long before expiry
    deactivate_user(db.pool(), user.user.id).await;
    let after = server.get("/api/v1/tasks").add_header(name, value).await;
    assert_eq!(after.status_code(), StatusCode::UNAUTHORIZED);
}
