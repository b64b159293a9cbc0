/// Session resolution middleware
///
/// Runs on every request: reads the `session` cookie, resolves it through
/// the store, and inserts a [`CurrentUser`] into request extensions. The
/// identity is an explicit value handlers extract and pass down — nothing
/// else in the application reads the cookie or holds ambient user state.
///
/// Anonymous requests are not rejected here; each route decides what
/// anonymity means (render the landing view, or redirect home).
///
/// # Example
///
/// ```no_run
/// use axum::Extension;
/// use ticklist_api::middleware::session::CurrentUser;
///
/// async fn handler(Extension(CurrentUser(identity)): Extension<CurrentUser>) -> String {
///     match identity {
///         Some(identity) => format!("Hello, {}!", identity.email),
///         None => "Hello, anonymous!".to_string(),
///     }
/// }
/// ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use ticklist_shared::auth::service;

use crate::app::AppState;
use crate::cookies::{self, SESSION_COOKIE};

/// The authenticated identity of a request.
#[derive(Debug, Clone)]
pub struct Identity {
    /// User id; all task scoping keys off this
    pub user_id: i64,

    /// The user's email, for views and redirect targets
    pub email: String,
}

/// Request extension holding the resolved identity (`None` = anonymous).
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<Identity>);

/// Resolves the session cookie and threads the identity into the request.
///
/// Store failures during resolution degrade to anonymous rather than
/// failing the request; the error is logged.
pub async fn resolve_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let identity = match cookies::cookie_value(req.headers(), SESSION_COOKIE) {
        Some(token) => match service::current_user(state.store.as_ref(), &token).await {
            Ok(user) => user.map(|u| Identity {
                user_id: u.id,
                email: u.email,
            }),
            Err(e) => {
                tracing::error!(error = %e, "session resolution failed");
                None
            }
        },
        None => None,
    };

    req.extensions_mut().insert(CurrentUser(identity));

    next.run(req).await
}
