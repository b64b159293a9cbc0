/// Task record and derived list views
///
/// A task is a single to-do item owned by exactly one user. The completion
/// flag is `is_active`: `true` means the task is still open, `false` means it
/// has been completed. (The underlying boolean is sense-inverted relative to
/// "done" — the field name exists so nobody has to remember that.)
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id BIGSERIAL PRIMARY KEY,
///     owner_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     description TEXT NOT NULL,
///     is_active BOOLEAN NOT NULL DEFAULT TRUE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: i64,

    /// Owning user; never changes after creation
    pub owner_id: i64,

    /// What needs doing; non-empty, immutable after creation
    pub description: String,

    /// `true` = active (not yet done), `false` = completed
    pub is_active: bool,

    /// When the task was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new task
///
/// New tasks always start active; there is no way to create a completed task.
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// Owning user
    pub owner_id: i64,

    /// Task description (validated non-empty at the boundary)
    pub description: String,
}

/// The three views over one user's tasks
///
/// `active` and `completed` are derived by filtering `all` — they are always
/// mutually exclusive and together cover the whole set. No ordering is
/// guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskLists {
    /// Every task owned by the user
    pub all: Vec<Task>,

    /// Tasks with `is_active == true`
    pub active: Vec<Task>,

    /// Tasks with `is_active == false`
    pub completed: Vec<Task>,
}

impl TaskLists {
    /// Splits one canonical collection into the three views.
    ///
    /// Deriving both filters from a single fetch keeps the views consistent
    /// with each other even though the store is queried only once.
    pub fn from_all(all: Vec<Task>) -> Self {
        let active = all.iter().filter(|t| t.is_active).cloned().collect();
        let completed = all.iter().filter(|t| !t.is_active).cloned().collect();

        Self {
            all,
            active,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, is_active: bool) -> Task {
        Task {
            id,
            owner_id: 1,
            description: format!("task {}", id),
            is_active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_task_lists_partition() {
        let lists = TaskLists::from_all(vec![task(1, true), task(2, false), task(3, true)]);

        assert_eq!(lists.all.len(), 3);
        assert_eq!(lists.active.len(), 2);
        assert_eq!(lists.completed.len(), 1);
        assert!(lists.active.iter().all(|t| t.is_active));
        assert!(lists.completed.iter().all(|t| !t.is_active));
    }

    #[test]
    fn test_task_lists_empty() {
        let lists = TaskLists::from_all(vec![]);
        assert!(lists.all.is_empty());
        assert!(lists.active.is_empty());
        assert!(lists.completed.is_empty());
    }
}
