//! # Account Core
//!
//! Client-side logic behind the profile editor and the sign-up form.
//!
//! ## Overview
//!
//! - [`profile`]: the profile update policy. Decides whether a submission is
//!   acceptable and builds the exact payload for the update call, including
//!   password fields only when a password change was asked for.
//! - [`sign_up`]: the sign-up policy.
//! - [`validation`]: field errors and the shared rules behind both forms.
//! - [`api`]: the [`AccountApi`](api::AccountApi) transport trait and its
//!   `reqwest` implementation.
//! - [`session`]: the in-memory signed-in user.
//! - [`flows`]: one async call per submit gesture, tying the above together.
//! - [`feedback`]: maps a flow result to inline errors or an alert.
//!
//! ## Examples
//!
//! ```
//! use account_core::profile::validate_and_assemble;
//! use account_core::validation::{FieldErrorKind, FormField};
//! use account_model::ProfileUpdateInput;
//!
//! let payload = validate_and_assemble(ProfileUpdateInput::new("Ana", "ana@x.com")).unwrap();
//! assert!(!payload.changes_password());
//!
//! let errors = validate_and_assemble(ProfileUpdateInput::new("", "bad-email")).unwrap_err();
//! assert_eq!(errors.kind_of(FormField::Name), Some(FieldErrorKind::Required));
//! assert_eq!(errors.kind_of(FormField::Email), Some(FieldErrorKind::InvalidFormat));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod api;
pub mod error;
pub mod feedback;
pub mod flows;
pub mod profile;
pub mod session;
pub mod sign_up;
pub mod validation;

pub use error::{SubmitError, TransportError};
pub use feedback::{Alert, Feedback, Route};
pub use flows::{AvatarFlow, ProfileFlow, SignUpFlow};
pub use profile::validate_and_assemble;
pub use session::SessionStore;
pub use sign_up::{SignUpRules, validate_sign_up};
pub use validation::{FieldError, FieldErrorKind, FieldErrors, FormField};
