//! What the UI shows after a submit.
//!
//! Validation failures become inline messages; everything else becomes an
//! alert, optionally followed by a navigation.

use account_model::User;
use serde::Serialize;

use crate::error::SubmitError;
use crate::validation::FieldErrors;

/// Where the UI should go after dismissing an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Back,
    SignIn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Alert {
    fn new(title: &str, message: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            message: message.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feedback {
    /// Nothing to show.
    None,
    /// Attach messages to the offending fields.
    Inline { field_errors: FieldErrors },
    Alert {
        alert: Alert,
        #[serde(skip_serializing_if = "Option::is_none")]
        route: Option<Route>,
    },
}

impl Feedback {
    pub fn for_profile(result: &Result<User, SubmitError>) -> Self {
        match result {
            Ok(_) => Self::alert("Profile updated!", None, Some(Route::Back)),
            Err(err) => Self::failure(
                err,
                Alert::new("Profile update failed", Some("Please try again.")),
            ),
        }
    }

    pub fn for_sign_up(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => Self::alert(
                "Account created!",
                Some("You can now sign in."),
                Some(Route::SignIn),
            ),
            Err(err) => Self::failure(
                err,
                Alert::new(
                    "Sign-up failed",
                    Some("Something went wrong while creating your account."),
                ),
            ),
        }
    }

    pub fn for_avatar(result: &Result<Option<User>, SubmitError>) -> Self {
        match result {
            Ok(_) => Feedback::None,
            Err(err) => Self::failure(err, Alert::new("Could not update your avatar", None)),
        }
    }

    fn alert(title: &str, message: Option<&str>, route: Option<Route>) -> Self {
        Feedback::Alert {
            alert: Alert::new(title, message),
            route,
        }
    }

    fn failure(err: &SubmitError, generic: Alert) -> Self {
        match err {
            SubmitError::ValidationFailed { field_errors } => Feedback::Inline {
                field_errors: field_errors.clone(),
            },
            _ => Feedback::Alert {
                alert: generic,
                route: None,
            },
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Feedback::Inline { field_errors } => Some(field_errors),
            _ => None,
        }
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            Feedback::Alert { route, .. } => *route,
            _ => None,
        }
    }
}
