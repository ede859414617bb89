/**
 * User Model and Database Operations
 *
 * This module defines the user record and its database operations. Email
 * uniqueness is enforced by the database constraint, so concurrent
 * registrations of the same address are serialized by the store: the
 * loser of the race gets a `DuplicateEmail` error instead of silently
 * overwriting.
 *
 * All lookups are case-sensitive exact match.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::error::ApiError;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// User email address (unique, used as token subject)
    pub email: String,
    /// Hashed password (bcrypt); never serialized outward
    pub hashed_password: String,
    /// Whether the account may log in and act
    pub is_active: bool,
    /// Whether the account may see and delete all tasks
    pub is_superuser: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// Hashes the password and inserts the record with `is_active = true`
/// and `is_superuser = false`.
///
/// # Errors
///
/// * `ApiError::DuplicateEmail` - the email is already registered
///   (detected via the unique constraint, so the check also holds under
///   concurrent registration)
/// * `ApiError::Database` - any other persistence failure
pub async fn create_user(pool: &PgPool, email: &str, password: &str) -> Result<User, ApiError> {
    let hashed_password = hash_password(password)?;

    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, hashed_password, is_active, is_superuser)
        VALUES ($1, $2, TRUE, FALSE)
        RETURNING id, email, hashed_password, is_active, is_superuser, created_at
        "#,
    )
    .bind(email)
    .bind(&hashed_password)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(ApiError::DuplicateEmail)
        }
        Err(e) => Err(ApiError::Database(e)),
    }
}

/// Get user by email (case-sensitive exact match)
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, hashed_password, is_active, is_superuser, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, hashed_password, is_active, is_superuser, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Set the active flag on a user
///
/// Deactivation takes effect on the user's next request: the session
/// resolution path re-checks `is_active` every time, it does not wait
/// for outstanding tokens to expire.
///
/// # Returns
///
/// The updated user, or `None` if the id does not exist.
pub async fn set_active(
    pool: &PgPool,
    user_id: i64,
    is_active: bool,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET is_active = $1
        WHERE id = $2
        RETURNING id, email, hashed_password, is_active, is_superuser, created_at
        "#,
    )
    .bind(is_active)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Promote a user to superuser
///
/// # Returns
///
/// The updated user, or `None` if the id does not exist.
pub async fn promote_to_superuser(pool: &PgPool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET is_superuser = TRUE
        WHERE id = $1
        RETURNING id, email, hashed_password, is_active, is_superuser, created_at
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
