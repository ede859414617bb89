/**
 * Router Configuration
 *
 * This module assembles the Axum router: auth endpoints, task endpoints,
 * the root welcome route, request logging, and a permissive development
 * CORS layer.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/v1/auth/access-token` - token login (form fields)
 * - `POST /api/v1/auth/register` - user registration (JSON)
 *
 * ## Tasks (all require a bearer token)
 * - `GET /api/v1/tasks` - list visible tasks
 * - `POST /api/v1/tasks` - create a task
 * - `GET /api/v1/tasks/{id}` - read one task
 * - `DELETE /api/v1/tasks/{id}` - delete one task
 */

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::auth::handlers::{login, register};
use crate::middleware::logging::logging_middleware;
use crate::server::state::AppState;
use crate::tasks::handlers::{create_task, delete_task, list_tasks, read_task};

/// Root welcome route
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the TaskTrack API" }))
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool + token configuration)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/v1/auth/access-token", post(login))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/tasks", get(list_tasks).post(create_task))
        .route("/api/v1/tasks/{id}", get(read_task).delete(delete_task))
        .layer(axum::middleware::from_fn(logging_middleware))
        // Dev/demo CORS: any origin, with credentials
        .layer(CorsLayer::very_permissive())
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(app_state)
}
