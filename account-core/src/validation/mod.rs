//! Field-level validation primitives shared by the profile and sign-up forms.
//!
//! Rules never trim or normalise input: a value is empty only when it has no
//! characters at all.

mod email;
mod field;

pub use email::is_valid_email;
pub use field::{FieldError, FieldErrorKind, FieldErrors, FieldErrorsIter, FormField};

/// Record `Required` on `field` when `value` is empty. Returns whether the
/// value was present.
pub(crate) fn require(errors: &mut FieldErrors, field: FormField, value: &str) -> bool {
    if value.is_empty() {
        errors.record(field, FieldError::required(field));
        false
    } else {
        true
    }
}

/// The e-mail rule used by both forms: required, then well-formed.
pub(crate) fn check_email(errors: &mut FieldErrors, email: &str) {
    if require(errors, FormField::Email, email) && !is_valid_email(email) {
        errors.record(FormField::Email, FieldError::invalid_email());
    }
}
