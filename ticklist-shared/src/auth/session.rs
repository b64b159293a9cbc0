/// Session token utilities
///
/// Login sessions are identified by an opaque random token carried in the
/// user's cookie. Tokens are hashed with SHA-256 before storage, so a leaked
/// database dump cannot be replayed as live cookies.
///
/// # Token Format
///
/// 32 random base62 chars (`[A-Za-z0-9]`), ~190 bits of entropy.
///
/// # Example
///
/// ```
/// use ticklist_shared::auth::session::{generate_session_token, hash_session_token};
///
/// let (token, hash) = generate_session_token();
/// assert_eq!(token.len(), 32);
/// assert_eq!(hash, hash_session_token(&token));
/// ```

use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of a session token (characters)
pub const SESSION_TOKEN_LENGTH: usize = 32;

/// Generates a new session token
///
/// # Returns
///
/// Tuple of (plaintext_token, sha256_hash). The plaintext goes into the
/// cookie; only the hash is stored.
pub fn generate_session_token() -> (String, String) {
    let token = generate_random_string(SESSION_TOKEN_LENGTH);
    let hash = hash_session_token(&token);

    (token, hash)
}

/// Generates a random alphanumeric string
///
/// Base62 (A-Z, a-z, 0-9) keeps tokens cookie-safe without encoding.
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Hashes a session token using SHA-256
///
/// # Returns
///
/// Hex-encoded SHA-256 hash (64 characters)
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
