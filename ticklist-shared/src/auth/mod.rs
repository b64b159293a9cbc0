/// Authentication for Ticklist
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`session`]: Opaque session token generation and hashing
/// - [`service`]: Register / login / current-user / logout operations
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with 64 MB memory, 3 iterations
/// - **Session Tokens**: 32 random base62 chars, stored as SHA-256 hashes
/// - **Constant-time Comparison**: Password verification is constant-time
///
/// Raw passwords and plaintext session tokens are never persisted or logged.

pub mod password;
pub mod service;
pub mod session;
