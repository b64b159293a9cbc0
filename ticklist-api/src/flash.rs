/// One-shot user notices
///
/// Every recoverable user-input mistake (wrong password, duplicate email,
/// empty task, ...) turns into a redirect back to the originating form plus
/// a notice shown exactly once on the next rendered view. The notice rides
/// the `flash` cookie as a machine code; views map it to display text and
/// clear the cookie.

use axum::http::HeaderMap;

use crate::cookies::{self, FLASH_COOKIE};

/// The notices this application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// Register: the email is already registered.
    EmailExists,

    /// Register: the submitted email is not a valid address.
    InvalidEmail,

    /// Login: no account with that email.
    EmailNotFound,

    /// Login: wrong password.
    PasswordIncorrect,

    /// Add task: the description was empty.
    EmptyTask,
}

impl Flash {
    /// Cookie-safe machine code.
    pub fn code(&self) -> &'static str {
        match self {
            Flash::EmailExists => "email_exists",
            Flash::InvalidEmail => "invalid_email",
            Flash::EmailNotFound => "email_not_found",
            Flash::PasswordIncorrect => "password_incorrect",
            Flash::EmptyTask => "empty_task",
        }
    }

    /// Parses a machine code back into a notice.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "email_exists" => Some(Flash::EmailExists),
            "invalid_email" => Some(Flash::InvalidEmail),
            "email_not_found" => Some(Flash::EmailNotFound),
            "password_incorrect" => Some(Flash::PasswordIncorrect),
            "empty_task" => Some(Flash::EmptyTask),
            _ => None,
        }
    }

    /// Display text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Flash::EmailExists => "You've already signed up with that email, log in instead!",
            Flash::InvalidEmail => "Please enter a valid email address.",
            Flash::EmailNotFound => "This email doesn't exist, please try again.",
            Flash::PasswordIncorrect => "Password incorrect, please try again.",
            Flash::EmptyTask => "Please add a task!",
        }
    }

    /// The `Set-Cookie` value carrying this notice to the next view.
    pub fn cookie(&self) -> String {
        cookies::flash_cookie(self.code())
    }
}

/// Reads the pending notice from request headers, if any.
///
/// Callers that render a view must also send [`cookies::clear_flash_cookie`]
/// so the notice shows only once.
pub fn take_flash(headers: &HeaderMap) -> Option<Flash> {
    cookies::cookie_value(headers, FLASH_COOKIE)
        .as_deref()
        .and_then(Flash::from_code)
}
