/// PostgreSQL implementation of the store traits
///
/// Wraps a [`PgPool`] and issues one query per operation. Owner scoping is
/// enforced in the SQL itself (`WHERE id = $1 AND owner_id = $2`), so a
/// foreign task id can never load, mutate, or delete a row.
///
/// # Example
///
/// ```no_run
/// use ticklist_shared::db::pool::{create_pool, DatabaseConfig};
/// use ticklist_shared::store::postgres::PgStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: std::env::var("DATABASE_URL")?,
///     ..Default::default()
/// })
/// .await?;
///
/// let store = PgStore::new(pool);
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{AuthSession, CreateSession, CreateTask, CreateUser, Task, User};
use crate::store::{
    SessionStore, StoreError, StorePing, StoreResult, TaskStore, UserStore,
};

/// Store backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Maps sqlx failures, surfacing unique-email violations as their own variant.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if let Some(constraint) = db_err.constraint() {
            if constraint.contains("email") {
                return StoreError::DuplicateEmail(String::new());
            }
        }
    }
    StoreError::backend(err)
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, data: CreateUser) -> StoreResult<User> {
        let email = data.email.clone();
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(data.email)
        .bind(data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match map_sqlx_error(e) {
            StoreError::DuplicateEmail(_) => StoreError::DuplicateEmail(email),
            other => other,
        })
    }

    async fn find_user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}

#[async_trait]
impl TaskStore for PgStore {
    async fn insert_task(&self, data: CreateTask) -> StoreResult<Task> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (owner_id, description, is_active)
            VALUES ($1, $2, TRUE)
            RETURNING id, owner_id, description, is_active, created_at
            "#,
        )
        .bind(data.owner_id)
        .bind(data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_task(&self, id: i64, owner_id: i64) -> StoreResult<Option<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, owner_id, description, is_active, created_at
            FROM tasks
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn list_tasks_by_owner(&self, owner_id: i64) -> StoreResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, owner_id, description, is_active, created_at
            FROM tasks
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn set_task_active(
        &self,
        id: i64,
        owner_id: i64,
        is_active: bool,
    ) -> StoreResult<Option<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET is_active = $3
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, description, is_active, created_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn delete_task(&self, id: i64, owner_id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SessionStore for PgStore {
    async fn insert_session(&self, data: CreateSession) -> StoreResult<AuthSession> {
        sqlx::query_as::<_, AuthSession>(
            r#"
            INSERT INTO sessions (token_hash, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, token_hash, user_id, created_at, expires_at
            "#,
        )
        .bind(data.token_hash)
        .bind(data.user_id)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_session(&self, token_hash: &str) -> StoreResult<Option<AuthSession>> {
        sqlx::query_as::<_, AuthSession>(
            r#"
            SELECT id, token_hash, user_id, created_at, expires_at
            FROM sessions
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn delete_session(&self, token_hash: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn purge_expired_sessions(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl StorePing for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
