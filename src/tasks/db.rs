/**
 * Task Model and Database Operations
 *
 * This module defines the task record and its database operations. Every
 * task has exactly one owner, set at creation and never changed. List
 * operations paginate with offset/limit and filter by owner at the query
 * level, so a non-superuser's listing never loads foreign rows.
 */

use serde::Serialize;
use sqlx::PgPool;

/// Task struct representing an owned task record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: i64,
    /// Task title (non-empty)
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// ID of the owning user; immutable after creation
    pub owner_id: i64,
}

/// Create a new task owned by the given user
pub async fn create_task(
    pool: &PgPool,
    owner_id: i64,
    title: &str,
    description: Option<&str>,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (title, description, owner_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, description, owner_id
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(owner_id)
    .fetch_one(pool)
    .await
}

/// Get a task by ID
pub async fn get_task(pool: &PgPool, task_id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, owner_id
        FROM tasks
        WHERE id = $1
        "#,
    )
    .bind(task_id)
    .fetch_optional(pool)
    .await
}

/// List tasks owned by a user, with offset/limit pagination
pub async fn list_tasks_by_owner(
    pool: &PgPool,
    owner_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, owner_id
        FROM tasks
        WHERE owner_id = $1
        ORDER BY id
        OFFSET $2 LIMIT $3
        "#,
    )
    .bind(owner_id)
    .bind(skip.max(0))
    .bind(limit.max(0))
    .fetch_all(pool)
    .await
}

/// List all tasks regardless of owner, with offset/limit pagination
///
/// Superuser-only at the handler level; the store itself does not check.
pub async fn list_all_tasks(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, owner_id
        FROM tasks
        ORDER BY id
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(skip.max(0))
    .bind(limit.max(0))
    .fetch_all(pool)
    .await
}

/// Delete a task by ID
///
/// # Returns
///
/// The deleted task, or `None` if the id did not exist (including the
/// case where another request deleted it first).
pub async fn delete_task(pool: &PgPool, task_id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        DELETE FROM tasks
        WHERE id = $1
        RETURNING id, title, description, owner_id
        "#,
    )
    .bind(task_id)
    .fetch_optional(pool)
    .await
}
