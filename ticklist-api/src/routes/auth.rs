/// Authentication endpoints
///
/// # Endpoints
///
/// - `GET,POST /login` - Login view / attempt login
/// - `GET,POST /register` - Registration view / attempt registration
/// - `GET /logout` - Close the session and go home
///
/// Bad credentials and duplicate emails are user-input errors: they set a
/// one-shot notice and redirect back to the relevant form, they never fail
/// the request. A successful login or registration answers with a redirect
/// to `/{email}` plus the session cookie.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect, Response},
    Extension, Form, Json,
};
use serde::Deserialize;
use validator::Validate;

use ticklist_shared::auth::service::{self, AuthOutcomeError};

use crate::app::AppState;
use crate::cookies::{self, SESSION_COOKIE};
use crate::error::{ApiError, ApiResult};
use crate::flash::{self, Flash};
use crate::middleware::session::CurrentUser;
use crate::routes::{flash_redirect, session_redirect};

/// Login form body
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Registration form body
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    pub password: String,
}

/// Renders a small auth view with the pending notice, consuming it.
fn auth_view(view: &'static str, logged_in: bool, headers: &HeaderMap) -> Response {
    let notice = flash::take_flash(headers);

    let mut response = Json(serde_json::json!({
        "view": view,
        "logged_in": logged_in,
        "notice": notice.map(|f| f.message()),
    }))
    .into_response();

    if notice.is_some() {
        response.headers_mut().append(
            header::SET_COOKIE,
            cookies::clear_flash_cookie().parse().unwrap(),
        );
    }

    response
}

/// Maps the internal variants of an auth outcome; the user-visible variants
/// must be handled before calling this.
fn internal(err: AuthOutcomeError) -> ApiError {
    match err {
        AuthOutcomeError::Password(e) => e.into(),
        AuthOutcomeError::Store(e) => e.into(),
        other => ApiError::InternalError(format!("unexpected auth outcome: {}", other)),
    }
}

/// `GET /login`
pub async fn login_view(
    Extension(CurrentUser(identity)): Extension<CurrentUser>,
    headers: HeaderMap,
) -> Response {
    auth_view("login", identity.is_some(), &headers)
}

/// `POST /login`
///
/// Unknown email and wrong password each set their own notice and redirect
/// back to the login form; nothing else about the failure is revealed.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Response> {
    let ttl = state.config.session.ttl();

    match service::login(state.store.as_ref(), &form.email, &form.password, ttl).await {
        Ok((user, token)) => Ok(session_redirect(&state, &user.email, &token)),
        Err(AuthOutcomeError::EmailNotFound) => {
            Ok(flash_redirect(Flash::EmailNotFound, "/login"))
        }
        Err(AuthOutcomeError::PasswordIncorrect) => {
            Ok(flash_redirect(Flash::PasswordIncorrect, "/login"))
        }
        Err(err) => Err(internal(err)),
    }
}

/// `GET /register`
pub async fn register_view(
    Extension(CurrentUser(identity)): Extension<CurrentUser>,
    headers: HeaderMap,
) -> Response {
    auth_view("register", identity.is_some(), &headers)
}

/// `POST /register`
///
/// An already-registered email redirects to the login form with its notice.
/// Registering while logged in is allowed and switches the session to the
/// new account.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> ApiResult<Response> {
    if form.validate().is_err() {
        return Ok(flash_redirect(Flash::InvalidEmail, "/register"));
    }

    let ttl = state.config.session.ttl();

    match service::register(state.store.as_ref(), &form.email, &form.password, ttl).await {
        Ok((user, token)) => Ok(session_redirect(&state, &user.email, &token)),
        Err(AuthOutcomeError::EmailTaken) => Ok(flash_redirect(Flash::EmailExists, "/login")),
        Err(err) => Err(internal(err)),
    }
}

/// `GET /logout`
///
/// Invalidates the session row and clears the cookie. Safe to call while
/// anonymous.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    if let Some(token) = cookies::cookie_value(&headers, SESSION_COOKIE) {
        service::logout(state.store.as_ref(), &token).await?;
    }

    let clear = cookies::clear_session_cookie(state.config.session.secure_cookies);

    let mut response = Redirect::to("/").into_response();
    response
        .headers_mut()
        .append(header::SET_COOKIE, clear.parse().unwrap());

    Ok(response)
}
