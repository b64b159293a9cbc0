/// Cookie plumbing
///
/// The service sets exactly two cookies: the `session` cookie carrying the
/// opaque login token, and the short-lived `flash` cookie carrying a notice
/// code for the next rendered view. Both are HttpOnly; values are plain
/// base62/snake_case strings so no encoding layer is needed.

use axum::http::{header, HeaderMap};

/// Name of the login session cookie
pub const SESSION_COOKIE: &str = "session";

/// Name of the one-shot notice cookie
pub const FLASH_COOKIE: &str = "flash";

/// Extracts a cookie value by name from request headers.
///
/// Handles multiple `Cookie` headers and multiple pairs per header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Builds the `Set-Cookie` value establishing a login session.
pub fn session_cookie(token: &str, max_age_seconds: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, token, max_age_seconds
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Builds the `Set-Cookie` value clearing the login session.
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax",
        SESSION_COOKIE
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Builds the `Set-Cookie` value carrying a flash code to the next view.
pub fn flash_cookie(code: &str) -> String {
    // 60 seconds is plenty for the immediately following redirect + render.
    format!(
        "{}={}; Path=/; Max-Age=60; HttpOnly; SameSite=Lax",
        FLASH_COOKIE, code
    )
}

/// Builds the `Set-Cookie` value consuming the flash cookie.
pub fn clear_flash_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", FLASH_COOKIE)
}
