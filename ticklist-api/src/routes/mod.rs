/// Route handlers
///
/// Each route does one component call and produces one response: a JSON
/// view payload, a redirect, or a small acknowledgment. There is no
/// orchestration beyond that.
///
/// - `health`: Health check endpoint
/// - `home`: Landing page and the per-user task view
/// - `auth`: Login, registration, logout
/// - `tasks`: Add, toggle, delete

pub mod auth;
pub mod health;
pub mod home;
pub mod tasks;

use axum::{
    http::header,
    response::{IntoResponse, Redirect, Response},
};

use crate::app::AppState;
use crate::cookies;
use crate::flash::Flash;

/// Redirect carrying a one-shot notice for the next rendered view.
pub(crate) fn flash_redirect(flash: Flash, to: &str) -> Response {
    let mut response = Redirect::to(to).into_response();
    response
        .headers_mut()
        .append(header::SET_COOKIE, flash.cookie().parse().unwrap());
    response
}

/// Redirect to the user's task view, establishing a fresh login session.
///
/// Any previously held session cookie is simply replaced; registering or
/// logging in while already authenticated switches the acting account.
pub(crate) fn session_redirect(state: &AppState, email: &str, token: &str) -> Response {
    let max_age = state.config.session.ttl().num_seconds();
    let cookie =
        cookies::session_cookie(token, max_age, state.config.session.secure_cookies);

    let mut response = Redirect::to(&format!("/{}", email)).into_response();
    response
        .headers_mut()
        .append(header::SET_COOKIE, cookie.parse().unwrap());
    response
}
