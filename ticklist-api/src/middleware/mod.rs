/// Middleware modules for the API server
///
/// - `session`: Resolves the session cookie into a request identity
/// - `security`: Security headers on every response

pub mod security;
pub mod session;
