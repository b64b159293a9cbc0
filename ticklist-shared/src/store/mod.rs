/// Store layer for Ticklist
///
/// Persistence is expressed as trait interfaces over plain records, so the
/// HTTP layer and the auth/task components never touch SQL directly and can
/// be exercised against an in-memory implementation in tests.
///
/// # Modules
///
/// - `postgres`: sqlx/PostgreSQL implementation used in production
/// - `memory`: HashMap-backed implementation for tests
///
/// # Example
///
/// ```no_run
/// use ticklist_shared::store::{memory::MemoryStore, UserStore};
/// use ticklist_shared::models::CreateUser;
///
/// # async fn example() -> Result<(), ticklist_shared::store::StoreError> {
/// let store = MemoryStore::new();
/// let user = store
///     .insert_user(CreateUser {
///         email: "user@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     })
///     .await?;
/// assert_eq!(store.find_user_by_id(user.id).await?.unwrap().email, user.email);
/// # Ok(())
/// # }
/// ```

pub mod memory;
pub mod postgres;

use crate::models::{AuthSession, CreateSession, CreateTask, CreateUser, Task, User};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Unique-email constraint violated on insert.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Database or connection error.
    #[error("store error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps any error type as a backend failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}

/// Persistence operations on user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateEmail`] if the email is already
    /// registered.
    async fn insert_user(&self, data: CreateUser) -> StoreResult<User>;

    /// Finds a user by id. Returns `None` if absent.
    async fn find_user_by_id(&self, id: i64) -> StoreResult<Option<User>>;

    /// Finds a user by email. Returns `None` if absent.
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
}

/// Persistence operations on tasks.
///
/// Every lookup and mutation takes the caller's `owner_id` and filters by it.
/// Owner scoping at this layer is the sole access-control mechanism in the
/// system: a task that belongs to someone else behaves exactly like a task
/// that does not exist.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts a new task (always active).
    async fn insert_task(&self, data: CreateTask) -> StoreResult<Task>;

    /// Finds a task by `(id, owner_id)`. Returns `None` if absent or owned
    /// by another user.
    async fn find_task(&self, id: i64, owner_id: i64) -> StoreResult<Option<Task>>;

    /// Lists every task owned by `owner_id`. No ordering guarantee.
    async fn list_tasks_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Task>>;

    /// Sets the `is_active` flag of a task scoped by `(id, owner_id)`.
    ///
    /// Returns the updated task, or `None` if no matching row exists.
    async fn set_task_active(
        &self,
        id: i64,
        owner_id: i64,
        is_active: bool,
    ) -> StoreResult<Option<Task>>;

    /// Deletes a task scoped by `(id, owner_id)`.
    ///
    /// Returns `true` if a row was removed, `false` if nothing matched.
    async fn delete_task(&self, id: i64, owner_id: i64) -> StoreResult<bool>;
}

/// Persistence operations on login sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Opens a new session.
    async fn insert_session(&self, data: CreateSession) -> StoreResult<AuthSession>;

    /// Finds a session by token hash. Returns `None` if absent.
    ///
    /// Expiry is NOT checked here; callers decide what an expired session
    /// means.
    async fn find_session(&self, token_hash: &str) -> StoreResult<Option<AuthSession>>;

    /// Deletes a session by token hash. Idempotent.
    async fn delete_session(&self, token_hash: &str) -> StoreResult<bool>;

    /// Removes every expired session. Returns the number removed.
    async fn purge_expired_sessions(&self) -> StoreResult<u64>;
}

/// Liveness probe for the backing store.
#[async_trait]
pub trait StorePing: Send + Sync {
    /// Cheap round-trip to verify the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

/// The complete store interface the application is built against.
pub trait Store: UserStore + TaskStore + SessionStore + StorePing {}

impl<T: UserStore + TaskStore + SessionStore + StorePing> Store for T {}
