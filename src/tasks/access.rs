/**
 * Task Access Control
 *
 * The single authorization rule for individual task operations: an actor
 * may read or delete a task iff they are a superuser or they own it.
 * Pure function, no I/O.
 *
 * List operations do not use this check; they filter by owner inside the
 * query instead, so the rule never has to be applied to foreign rows.
 */

use crate::auth::users::User;
use crate::tasks::db::Task;

/// Decide whether `actor` may read or delete `task`
pub fn can_read_or_delete(actor: &User, task: &Task) -> bool {
    actor.is_superuser || actor.id == task.owner_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: i64, is_superuser: bool) -> User {
        User {
            id,
            email: format!("user{id}@example.com"),
            hashed_password: "$2b$12$hash".to_string(),
            is_active: true,
            is_superuser,
            created_at: Utc::now(),
        }
    }

    fn task(owner_id: i64) -> Task {
        Task {
            id: 42,
            title: "buy milk".to_string(),
            description: None,
            owner_id,
        }
    }

    #[test]
    fn test_owner_may_access_own_task() {
        assert!(can_read_or_delete(&user(1, false), &task(1)));
    }

    #[test]
    fn test_non_owner_denied() {
        assert!(!can_read_or_delete(&user(2, false), &task(1)));
    }

    #[test]
    fn test_superuser_may_access_any_task() {
        assert!(can_read_or_delete(&user(3, true), &task(1)));
        assert!(can_read_or_delete(&user(3, true), &task(3)));
    }

    #[test]
    fn test_superuser_flag_beats_ownership() {
        // Full truth table: {superuser, owner, non-owner} x {own, foreign}
        assert!(can_read_or_delete(&user(1, true), &task(1)));
        assert!(can_read_or_delete(&user(1, true), &task(2)));
        assert!(can_read_or_delete(&user(1, false), &task(1)));
        assert!(!can_read_or_delete(&user(1, false), &task(2)));
    }
}
