//! Raw form input as collected by the UI layer.
//!
//! These are free-text values with no guarantees attached; the validators
//! in `account-core` decide whether they become a payload.

use serde::Deserialize;

use crate::secret::Secret;

/// Values of the profile editor at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileUpdateInput {
    pub name: String,
    pub email: String,
    /// `None` and `Some("")` both mean "not changing the password".
    pub old_password: Option<Secret>,
    pub password: Secret,
    pub password_confirmation: Secret,
}

impl ProfileUpdateInput {
    /// Input for a name/email-only edit.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_old_password(mut self, old_password: impl Into<Secret>) -> Self {
        self.old_password = Some(old_password.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<Secret>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_password_confirmation(mut self, confirmation: impl Into<Secret>) -> Self {
        self.password_confirmation = confirmation.into();
        self
    }

    /// Whether this submission asks for a password change.
    pub fn changes_password(&self) -> bool {
        self.old_password.as_ref().is_some_and(|old| !old.is_empty())
    }
}

/// Values of the sign-up form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: Secret,
}

impl SignUpInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<Secret>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
