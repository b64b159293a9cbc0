/// Landing page and the per-user task view
///
/// # Endpoints
///
/// - `GET /` - Landing view, or redirect to the task view when logged in
/// - `GET,POST /{user_email}` - The authenticated user's task lists
///
/// The `{user_email}` path segment is decorative, kept for URL
/// compatibility: task scoping always uses the session identity, never the
/// path value. Browsing to someone else's URL shows your own tasks.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect, Response},
    Extension, Json,
};
use serde::Serialize;

use ticklist_shared::models::Task;
use ticklist_shared::tasks;

use crate::app::AppState;
use crate::cookies;
use crate::error::ApiResult;
use crate::flash;
use crate::middleware::session::CurrentUser;

/// The task view payload
///
/// `active_tasks` and `completed_tasks` are derived from `all_tasks` and are
/// always consistent with it.
#[derive(Debug, Serialize)]
pub struct TaskView {
    /// View discriminator
    pub view: &'static str,

    /// Email of the authenticated user (from the session, not the path)
    pub user_email: String,

    /// Every task the user owns
    pub all_tasks: Vec<Task>,

    /// Tasks not yet completed
    pub active_tasks: Vec<Task>,

    /// Completed tasks
    pub completed_tasks: Vec<Task>,

    /// One-shot notice, if a previous request left one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

/// The anonymous landing view.
pub(crate) fn landing() -> Response {
    Json(serde_json::json!({ "view": "landing" })).into_response()
}

/// `GET /`
///
/// Authenticated users are sent straight to their task view.
pub async fn index(Extension(CurrentUser(identity)): Extension<CurrentUser>) -> Response {
    match identity {
        Some(identity) => Redirect::to(&format!("/{}", identity.email)).into_response(),
        None => landing(),
    }
}

/// `GET,POST /{user_email}`
///
/// Renders the three task lists for the session identity. Falls back to the
/// landing view when anonymous.
pub async fn task_view(
    State(state): State<AppState>,
    Extension(CurrentUser(identity)): Extension<CurrentUser>,
    Path(_user_email): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let Some(identity) = identity else {
        return Ok(landing());
    };

    let lists = tasks::list_tasks(state.store.as_ref(), identity.user_id).await?;
    let notice = flash::take_flash(&headers);

    let view = TaskView {
        view: "tasks",
        user_email: identity.email,
        all_tasks: lists.all,
        active_tasks: lists.active,
        completed_tasks: lists.completed,
        notice: notice.map(|f| f.message()),
    };

    let mut response = Json(view).into_response();
    if notice.is_some() {
        response.headers_mut().append(
            header::SET_COOKIE,
            cookies::clear_flash_cookie().parse().unwrap(),
        );
    }

    Ok(response)
}
