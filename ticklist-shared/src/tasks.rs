/// Task component: list, add, toggle, delete
///
/// Every operation takes the acting user's id explicitly and goes through
/// [`crate::store::TaskStore`], whose queries filter by owner. A task id
/// belonging to another user is indistinguishable from a nonexistent one at
/// this layer.
///
/// # Example
///
/// ```no_run
/// use ticklist_shared::store::memory::MemoryStore;
/// use ticklist_shared::tasks;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new();
///
/// let task = tasks::add_task(&store, 1, "buy milk").await?;
/// let lists = tasks::list_tasks(&store, 1).await?;
/// assert_eq!(lists.active.len(), 1);
///
/// tasks::toggle_task(&store, 1, task.id).await?;
/// tasks::delete_task(&store, 1, task.id).await?;
/// # Ok(())
/// # }
/// ```

use thiserror::Error;
use tracing::info;

use crate::models::{CreateTask, Task, TaskLists};
use crate::store::{StoreError, TaskStore};

/// Failures of task operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Add: the submitted description was empty.
    #[error("task description is empty")]
    EmptyDescription,

    /// Toggle: no task with that id belongs to the caller.
    #[error("task not found: {0}")]
    NotFound(i64),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Returns the three views over a user's tasks.
///
/// One canonical fetch; `active` and `completed` are derived from it, so the
/// views can never disagree with each other.
pub async fn list_tasks(store: &dyn TaskStore, user_id: i64) -> Result<TaskLists, StoreError> {
    let all = store.list_tasks_by_owner(user_id).await?;
    Ok(TaskLists::from_all(all))
}

/// Creates a new active task owned by `user_id`.
///
/// # Errors
///
/// [`TaskError::EmptyDescription`] if `description` is empty; no row is
/// created.
pub async fn add_task(
    store: &dyn TaskStore,
    user_id: i64,
    description: &str,
) -> Result<Task, TaskError> {
    if description.is_empty() {
        return Err(TaskError::EmptyDescription);
    }

    let task = store
        .insert_task(CreateTask {
            owner_id: user_id,
            description: description.to_string(),
        })
        .await?;

    info!(task_id = task.id, user_id, "task created");
    Ok(task)
}

/// Flips a task between active and completed.
///
/// Missing or foreign ids are reported as [`TaskError::NotFound`] rather
/// than crashing the request. Toggling twice restores the original state.
pub async fn toggle_task(
    store: &dyn TaskStore,
    user_id: i64,
    task_id: i64,
) -> Result<Task, TaskError> {
    let task = store
        .find_task(task_id, user_id)
        .await?
        .ok_or(TaskError::NotFound(task_id))?;

    let updated = store
        .set_task_active(task_id, user_id, !task.is_active)
        .await?
        .ok_or(TaskError::NotFound(task_id))?;

    info!(
        task_id,
        user_id,
        is_active = updated.is_active,
        "task toggled"
    );
    Ok(updated)
}

/// Deletes a task owned by `user_id`.
///
/// A missing or foreign id is a silent no-op; returns whether a row was
/// actually removed.
pub async fn delete_task(
    store: &dyn TaskStore,
    user_id: i64,
    task_id: i64,
) -> Result<bool, StoreError> {
    let deleted = store.delete_task(task_id, user_id).await?;
    if deleted {
        info!(task_id, user_id, "task deleted");
    }
    Ok(deleted)
}
