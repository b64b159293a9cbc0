/// Credential verification and session lifecycle
///
/// These operations implement the auth component over the store traits. The
/// requesting identity is always an explicit value ([`crate::models::User`]
/// resolved from a session token) threaded into callers — there is no
/// ambient "current user" state anywhere in the crate.
///
/// Lookup-miss and credential-mismatch are ordinary outcomes, modeled as
/// [`AuthOutcomeError`] variants rather than panics, and nothing beyond
/// those two conditions is revealed to the caller.
///
/// # Example
///
/// ```no_run
/// use ticklist_shared::auth::service;
/// use ticklist_shared::store::memory::MemoryStore;
/// use chrono::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new();
///
/// let (user, token) =
///     service::register(&store, "a@x.com", "pw", Duration::hours(24)).await?;
/// assert_eq!(service::current_user(&store, &token).await?.unwrap().id, user.id);
///
/// service::logout(&store, &token).await?;
/// assert!(service::current_user(&store, &token).await?.is_none());
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use thiserror::Error;
use tracing::{debug, info};

use crate::auth::password::{self, PasswordError};
use crate::auth::session::{generate_session_token, hash_session_token};
use crate::models::{CreateSession, CreateUser, User};
use crate::store::{Store, StoreError};

/// Failures of register/login.
///
/// `EmailTaken`, `EmailNotFound` and `PasswordIncorrect` are the only
/// conditions ever surfaced to users; everything else is internal.
#[derive(Debug, Error)]
pub enum AuthOutcomeError {
    /// Register: the email is already registered.
    #[error("email already registered")]
    EmailTaken,

    /// Login: no account with that email.
    #[error("email not found")]
    EmailNotFound,

    /// Login: the password hash did not match.
    #[error("password incorrect")]
    PasswordIncorrect,

    /// Password hashing/verification failed internally.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Registers a new account and opens a session for it.
///
/// Email existence is pre-checked before insert; the store's unique
/// constraint backstops the race between check and insert.
///
/// # Returns
///
/// The created user and the plaintext session token for the cookie.
///
/// # Errors
///
/// [`AuthOutcomeError::EmailTaken`] if the email is already registered.
pub async fn register(
    store: &dyn Store,
    email: &str,
    password: &str,
    session_ttl: Duration,
) -> Result<(User, String), AuthOutcomeError> {
    if store.find_user_by_email(email).await?.is_some() {
        debug!("registration rejected, email already registered");
        return Err(AuthOutcomeError::EmailTaken);
    }

    let password_hash = password::hash_password(password)?;

    let user = store
        .insert_user(CreateUser {
            email: email.to_string(),
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail(_) => AuthOutcomeError::EmailTaken,
            other => AuthOutcomeError::Store(other),
        })?;

    info!(user_id = user.id, "user registered");

    let token = open_session(store, user.id, session_ttl).await?;
    Ok((user, token))
}

/// Verifies credentials and opens a session.
///
/// # Errors
///
/// [`AuthOutcomeError::EmailNotFound`] when no account matches the email,
/// [`AuthOutcomeError::PasswordIncorrect`] when the hash does not match.
/// Neither outcome opens a session.
pub async fn login(
    store: &dyn Store,
    email: &str,
    password: &str,
    session_ttl: Duration,
) -> Result<(User, String), AuthOutcomeError> {
    let user = store
        .find_user_by_email(email)
        .await?
        .ok_or(AuthOutcomeError::EmailNotFound)?;

    if !password::verify_password(password, &user.password_hash)? {
        debug!(user_id = user.id, "login rejected, password mismatch");
        return Err(AuthOutcomeError::PasswordIncorrect);
    }

    info!(user_id = user.id, "user logged in");

    let token = open_session(store, user.id, session_ttl).await?;
    Ok((user, token))
}

/// Resolves a session token to the authenticated user.
///
/// Unknown, expired, or dangling tokens resolve to `None` (anonymous).
/// Expired sessions are deleted on sight.
pub async fn current_user(store: &dyn Store, token: &str) -> Result<Option<User>, StoreError> {
    let token_hash = hash_session_token(token);

    let session = match store.find_session(&token_hash).await? {
        Some(session) => session,
        None => return Ok(None),
    };

    if session.is_expired() {
        store.delete_session(&token_hash).await?;
        return Ok(None);
    }

    store.find_user_by_id(session.user_id).await
}

/// Invalidates the session behind a token. Idempotent.
pub async fn logout(store: &dyn Store, token: &str) -> Result<(), StoreError> {
    let token_hash = hash_session_token(token);
    if store.delete_session(&token_hash).await? {
        info!("session closed");
    }
    Ok(())
}

/// Opens a session row and returns the plaintext token.
async fn open_session(
    store: &dyn Store,
    user_id: i64,
    ttl: Duration,
) -> Result<String, StoreError> {
    let (token, token_hash) = generate_session_token();

    store
        .insert_session(CreateSession {
            token_hash,
            user_id,
            expires_at: Utc::now() + ttl,
        })
        .await?;

    Ok(token)
}
