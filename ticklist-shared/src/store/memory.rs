/// In-memory implementation of the store traits
///
/// Thread-safe via an internal [`RwLock`]. Backs unit and integration tests
/// so the full application can run without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::models::{AuthSession, CreateSession, CreateTask, CreateUser, Task, User};
use crate::store::{
    SessionStore, StoreError, StorePing, StoreResult, TaskStore, UserStore,
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<i64, User>,
    tasks: HashMap<i64, Task>,
    sessions: HashMap<String, AuthSession>,
}

/// HashMap-backed store. Suitable for tests only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    next_user_id: Arc<AtomicI64>,
    next_task_id: Arc<AtomicI64>,
    next_session_id: Arc<AtomicI64>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| StoreError::backend(std::io::Error::other(e.to_string())))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|e| StoreError::backend(std::io::Error::other(e.to_string())))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, data: CreateUser) -> StoreResult<User> {
        let mut tables = self.write()?;

        if tables.users.values().any(|u| u.email == data.email) {
            return Err(StoreError::DuplicateEmail(data.email));
        }

        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            email: data.email,
            password_hash: data.password_hash,
            created_at: Utc::now(),
        };
        tables.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert_task(&self, data: CreateTask) -> StoreResult<Task> {
        let mut tables = self.write()?;

        let id = self.next_task_id.fetch_add(1, Ordering::SeqCst) + 1;
        let task = Task {
            id,
            owner_id: data.owner_id,
            description: data.description,
            is_active: true,
            created_at: Utc::now(),
        };
        tables.tasks.insert(id, task.clone());

        Ok(task)
    }

    async fn find_task(&self, id: i64, owner_id: i64) -> StoreResult<Option<Task>> {
        Ok(self
            .read()?
            .tasks
            .get(&id)
            .filter(|t| t.owner_id == owner_id)
            .cloned())
    }

    async fn list_tasks_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .read()?
            .tasks
            .values()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect();

        // Insertion order, matching the Postgres implementation.
        tasks.sort_by_key(|t| t.id);

        Ok(tasks)
    }

    async fn set_task_active(
        &self,
        id: i64,
        owner_id: i64,
        is_active: bool,
    ) -> StoreResult<Option<Task>> {
        let mut tables = self.write()?;

        match tables.tasks.get_mut(&id).filter(|t| t.owner_id == owner_id) {
            Some(task) => {
                task.is_active = is_active;
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_task(&self, id: i64, owner_id: i64) -> StoreResult<bool> {
        let mut tables = self.write()?;

        let owned = tables
            .tasks
            .get(&id)
            .map(|t| t.owner_id == owner_id)
            .unwrap_or(false);
        if owned {
            tables.tasks.remove(&id);
        }

        Ok(owned)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn insert_session(&self, data: CreateSession) -> StoreResult<AuthSession> {
        let mut tables = self.write()?;

        let id = self.next_session_id.fetch_add(1, Ordering::SeqCst) + 1;
        let session = AuthSession {
            id,
            token_hash: data.token_hash.clone(),
            user_id: data.user_id,
            created_at: Utc::now(),
            expires_at: data.expires_at,
        };
        tables.sessions.insert(data.token_hash, session.clone());

        Ok(session)
    }

    async fn find_session(&self, token_hash: &str) -> StoreResult<Option<AuthSession>> {
        Ok(self.read()?.sessions.get(token_hash).cloned())
    }

    async fn delete_session(&self, token_hash: &str) -> StoreResult<bool> {
        Ok(self.write()?.sessions.remove(token_hash).is_some())
    }

    async fn purge_expired_sessions(&self) -> StoreResult<u64> {
        let mut tables = self.write()?;

        let before = tables.sessions.len();
        tables.sessions.retain(|_, s| !s.is_expired());

        Ok((before - tables.sessions.len()) as u64)
    }
}

#[async_trait]
impl StorePing for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
