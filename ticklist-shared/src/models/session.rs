/// Browser login session record
///
/// A session binds an opaque cookie token to a user id for a limited time.
/// Only the SHA-256 hash of the token is persisted; the plaintext token
/// exists in the user's cookie and nowhere else.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE sessions (
///     id BIGSERIAL PRIMARY KEY,
///     token_hash VARCHAR(64) NOT NULL UNIQUE,
///     user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     expires_at TIMESTAMPTZ NOT NULL
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A login session
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuthSession {
    /// Unique session ID
    pub id: i64,

    /// SHA-256 hex hash of the session token
    pub token_hash: String,

    /// The user this session authenticates
    pub user_id: i64,

    /// When the session was opened
    pub created_at: DateTime<Utc>,

    /// After this instant the session authenticates nobody
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Input for opening a new session
#[derive(Debug, Clone)]
pub struct CreateSession {
    /// SHA-256 hex hash of the session token
    pub token_hash: String,

    /// The user to authenticate
    pub user_id: i64,

    /// Expiry instant
    pub expires_at: DateTime<Utc>,
}
