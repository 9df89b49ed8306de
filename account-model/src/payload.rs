//! Request bodies sent to the account API.
//!
//! Payloads are only built by the validators in `account-core`; the
//! constructors here do no checking of their own.

use serde::Serialize;

use crate::secret::Secret;

/// Body of the profile update request.
///
/// Serializes to `{name, email}` or, when a password change was requested,
/// to `{name, email, old_password, password, password_confirmation}`. The
/// password keys are omitted entirely otherwise, so the server never sees an
/// empty string it could take for "set the password to nothing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdatePayload {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub password_change: Option<PasswordChange>,
}

impl ProfileUpdatePayload {
    pub fn new(name: String, email: String, password_change: Option<PasswordChange>) -> Self {
        Self {
            name,
            email,
            password_change,
        }
    }

    pub fn changes_password(&self) -> bool {
        self.password_change.is_some()
    }
}

/// Password fields carried by a profile update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    pub old_password: Secret,
    pub password: Secret,
    pub password_confirmation: Secret,
}

/// Body of the account creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpPayload {
    pub name: String,
    pub email: String,
    pub password: Secret,
}
