/**
 * Task Handlers
 *
 * HTTP handlers for the task endpoints. Every handler resolves the
 * caller's bearer token first and threads the resulting user into its
 * store and access-control calls; nothing is injected implicitly.
 *
 * # Routes
 *
 * - `GET /api/v1/tasks` - list tasks (owner-scoped; superusers see all)
 * - `POST /api/v1/tasks` - create a task owned by the caller
 * - `GET /api/v1/tasks/{id}` - read a single task
 * - `DELETE /api/v1/tasks/{id}` - delete a task, returning it
 *
 * # Authorization
 *
 * Single-task reads and deletes consult [`can_read_or_delete`]; denials
 * surface as 400 "Not enough permissions" (preserved wire behavior).
 * Listing never applies a per-item check: the owner filter lives in the
 * query itself.
 */

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Json,
};
use serde::Deserialize;

use crate::auth::session::current_user;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::tasks::access::can_read_or_delete;
use crate::tasks::db::{self, Task};

/// Default page size for list operations
const DEFAULT_LIST_LIMIT: i64 = 100;

fn default_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}

/// Task creation request
#[derive(Debug, Deserialize)]
pub struct TaskCreate {
    /// Task title (must be non-empty)
    pub title: String,
    /// Optional description
    pub description: Option<String>,
}

/// Pagination parameters for list operations
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Number of rows to skip (default 0)
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of rows to return (default 100)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// List tasks visible to the caller
///
/// Superusers receive every task; everyone else receives only their own.
/// The partition happens in the query, so the result scales with the
/// caller's own data, not the whole table.
pub async fn list_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let user = current_user(&state, &headers).await?;

    let tasks = if user.is_superuser {
        db::list_all_tasks(&state.pool, params.skip, params.limit).await?
    } else {
        db::list_tasks_by_owner(&state.pool, user.id, params.skip, params.limit).await?
    };

    Ok(Json(tasks))
}

/// Create a new task owned by the caller
///
/// # Errors
///
/// * `400 Bad Request` - empty title
/// * `401 Unauthorized` - missing/invalid token
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TaskCreate>,
) -> Result<Json<Task>, ApiError> {
    let user = current_user(&state, &headers).await?;

    if request.title.trim().is_empty() {
        return Err(ApiError::Validation("Title must not be empty".to_string()));
    }

    let task = db::create_task(
        &state.pool,
        user.id,
        &request.title,
        request.description.as_deref(),
    )
    .await?;

    tracing::info!(task_id = task.id, owner_id = user.id, title = %task.title, "task_created");

    Ok(Json(task))
}

/// Get a single task by ID
///
/// # Errors
///
/// * `401 Unauthorized` - missing/invalid token
/// * `404 Not Found` - no task with this id
/// * `400 Bad Request` - caller is neither owner nor superuser
pub async fn read_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let user = current_user(&state, &headers).await?;

    let task = db::get_task(&state.pool, id).await?.ok_or(ApiError::NotFound)?;

    if !can_read_or_delete(&user, &task) {
        return Err(ApiError::Forbidden);
    }

    Ok(Json(task))
}

/// Delete a task, returning the deleted record
///
/// Ownership is checked against the fetched row before deletion. If the
/// row disappears between the check and the delete, the request reports
/// not-found rather than pretending success.
pub async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let user = current_user(&state, &headers).await?;

    let task = match db::get_task(&state.pool, id).await? {
        Some(task) => task,
        None => {
            tracing::warn!(task_id = id, user_id = user.id, reason = "not_found", "task_delete_failed");
            return Err(ApiError::NotFound);
        }
    };

    if !can_read_or_delete(&user, &task) {
        tracing::warn!(
            task_id = id,
            user_id = user.id,
            reason = "permission_denied",
            "task_delete_failed"
        );
        return Err(ApiError::Forbidden);
    }

    let deleted = db::delete_task(&state.pool, id).await?.ok_or(ApiError::NotFound)?;

    tracing::info!(task_id = id, user_id = user.id, "task_deleted");

    Ok(Json(deleted))
}
