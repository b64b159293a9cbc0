/// User account record
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id BIGSERIAL PRIMARY KEY,
///     email VARCHAR(255) NOT NULL UNIQUE,
///     password_hash VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// Accounts are created at registration and never mutated or deleted by this
/// service. Persistence operations live on [`crate::store::UserStore`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user account
///
/// Passwords are stored as Argon2id hashes, never in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned on creation
    pub id: i64,

    /// Email address, used as the login identifier
    ///
    /// Must be unique across all users
    pub email: String,

    /// Argon2id password hash (PHC string format)
    ///
    /// Never serialize this into API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Email address
    pub email: String,

    /// Argon2id password hash (NOT the plaintext password!)
    pub password_hash: String,
}
