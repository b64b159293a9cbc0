/// Data records for Ticklist
///
/// This module contains the plain data records persisted by the store layer.
/// Records carry no query logic of their own; all persistence goes through
/// the traits in [`crate::store`].
///
/// # Records
///
/// - `user`: Registered accounts
/// - `task`: Per-user to-do items
/// - `session`: Browser login sessions

pub mod session;
pub mod task;
pub mod user;

pub use session::{AuthSession, CreateSession};
pub use task::{CreateTask, Task, TaskLists};
pub use user::{CreateUser, User};
