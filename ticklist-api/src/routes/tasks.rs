/// Task mutation endpoints
///
/// # Endpoints
///
/// - `GET,POST /new_task` - Add a task for the authenticated user
/// - `GET,POST /check_task/{id}/` - Toggle a task, JSON acknowledgment
/// - `GET,POST /delete/{id}/` - Delete a task, redirect to the task view
///
/// Anonymous access to any of these redirects to the landing page rather
/// than answering with an error status. Ownership is enforced inside the
/// task component; these handlers only thread the identity through.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Extension, Form, Json,
};
use serde::Deserialize;

use ticklist_shared::tasks::{self, TaskError};

use crate::app::AppState;
use crate::error::ApiResult;
use crate::flash::Flash;
use crate::middleware::session::CurrentUser;
use crate::routes::flash_redirect;

/// New-task form body
#[derive(Debug, Deserialize)]
pub struct NewTaskForm {
    /// The task description; field name matches the submitted form input
    pub task: String,
}

/// `GET /new_task`
///
/// There is nothing to render; send the user where the form lives.
pub async fn new_task_view(Extension(CurrentUser(identity)): Extension<CurrentUser>) -> Response {
    match identity {
        Some(identity) => Redirect::to(&format!("/{}", identity.email)).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

/// `POST /new_task`
///
/// An empty description sets the "please add a task" notice and creates
/// nothing.
pub async fn new_task(
    State(state): State<AppState>,
    Extension(CurrentUser(identity)): Extension<CurrentUser>,
    Form(form): Form<NewTaskForm>,
) -> ApiResult<Response> {
    let Some(identity) = identity else {
        return Ok(Redirect::to("/").into_response());
    };

    let task_view = format!("/{}", identity.email);

    match tasks::add_task(state.store.as_ref(), identity.user_id, &form.task).await {
        Ok(_) => Ok(Redirect::to(&task_view).into_response()),
        Err(TaskError::EmptyDescription) => Ok(flash_redirect(Flash::EmptyTask, &task_view)),
        Err(err) => Err(err.into()),
    }
}

/// `GET,POST /check_task/{id}/`
///
/// Flips the task between active and completed. A missing or foreign id
/// answers 404 instead of crashing the request.
pub async fn check_task(
    State(state): State<AppState>,
    Extension(CurrentUser(identity)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> ApiResult<Response> {
    let Some(identity) = identity else {
        return Ok(Redirect::to("/").into_response());
    };

    tasks::toggle_task(state.store.as_ref(), identity.user_id, id).await?;

    Ok(Json(serde_json::json!({ "message": "Task status updated" })).into_response())
}

/// `GET,POST /delete/{id}/`
///
/// Deleting a missing or foreign id is a silent no-op; either way the user
/// lands back on their task view.
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(CurrentUser(identity)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> ApiResult<Response> {
    let Some(identity) = identity else {
        return Ok(Redirect::to("/").into_response());
    };

    tasks::delete_task(state.store.as_ref(), identity.user_id, id).await?;

    Ok(Redirect::to(&format!("/{}", identity.email)).into_response())
}
