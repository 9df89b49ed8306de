//! Profile update policy: which edits are acceptable and what gets sent.

use account_model::{PasswordChange, ProfileUpdateInput, ProfileUpdatePayload, Secret};
use tracing::debug;

use crate::validation::{self, FieldError, FieldErrors, FormField};

/// Validate a profile submission and build the request body for it.
///
/// Every applicable rule is checked and all failures are collected, one
/// message per field. The password rules run only when `old_password` is
/// non-empty; otherwise `password` and `password_confirmation` are ignored
/// whatever they contain and are left out of the payload.
pub fn validate_and_assemble(
    input: ProfileUpdateInput,
) -> Result<ProfileUpdatePayload, FieldErrors> {
    let mut errors = FieldErrors::new();

    validation::require(&mut errors, FormField::Name, &input.name);
    validation::check_email(&mut errors, &input.email);

    let ProfileUpdateInput {
        name,
        email,
        old_password,
        password,
        password_confirmation,
    } = input;

    let password_change = match old_password {
        Some(old_password) if !old_password.is_empty() => {
            check_password_change(&mut errors, &password, &password_confirmation);
            Some(PasswordChange {
                old_password,
                password,
                password_confirmation,
            })
        }
        _ => None,
    };

    if !errors.is_empty() {
        debug!(
            fields = %errors.fields().map(|f| f.as_str()).collect::<Vec<_>>().join(","),
            "profile update rejected"
        );
    }

    errors.into_result(ProfileUpdatePayload::new(name, email, password_change))
}

fn check_password_change(errors: &mut FieldErrors, password: &Secret, confirmation: &Secret) {
    validation::require(errors, FormField::Password, password.expose());
    if validation::require(
        errors,
        FormField::PasswordConfirmation,
        confirmation.expose(),
    ) && confirmation != password
    {
        errors.record(
            FormField::PasswordConfirmation,
            FieldError::confirmation_mismatch(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrorKind;
    use serde_json::json;

    fn input(
        name: &str,
        email: &str,
        old_password: &str,
        password: &str,
        confirmation: &str,
    ) -> ProfileUpdateInput {
        ProfileUpdateInput::new(name, email)
            .with_old_password(old_password)
            .with_password(password)
            .with_password_confirmation(confirmation)
    }

    #[test]
    fn name_and_email_only_edit() {
        let payload = validate_and_assemble(input("Ana", "ana@x.com", "", "", "")).unwrap();
        assert!(!payload.changes_password());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"name": "Ana", "email": "ana@x.com"})
        );
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let errors =
            validate_and_assemble(input("Ana", "ana@x.com", "old1", "new1", "new2")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.kind_of(FormField::PasswordConfirmation),
            Some(FieldErrorKind::Mismatch)
        );
    }

    #[test]
    fn empty_name_and_malformed_email_are_both_reported() {
        let errors = validate_and_assemble(input("", "bad-email", "", "", "")).unwrap_err();
        assert_eq!(errors.kind_of(FormField::Name), Some(FieldErrorKind::Required));
        assert_eq!(
            errors.kind_of(FormField::Email),
            Some(FieldErrorKind::InvalidFormat)
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn empty_email_is_required_not_malformed() {
        let errors = validate_and_assemble(input("Ana", "", "", "", "")).unwrap_err();
        assert_eq!(errors.kind_of(FormField::Email), Some(FieldErrorKind::Required));
    }

    #[test]
    fn password_change_requires_both_new_fields() {
        let errors = validate_and_assemble(input("Ana", "ana@x.com", "old1", "", "")).unwrap_err();
        assert_eq!(errors.kind_of(FormField::Password), Some(FieldErrorKind::Required));
        assert_eq!(
            errors.kind_of(FormField::PasswordConfirmation),
            Some(FieldErrorKind::Required)
        );
    }

    #[test]
    fn missing_confirmation_reports_required_before_mismatch() {
        let errors =
            validate_and_assemble(input("Ana", "ana@x.com", "old1", "new1", "")).unwrap_err();
        assert_eq!(
            errors.kind_of(FormField::PasswordConfirmation),
            Some(FieldErrorKind::Required)
        );
        assert!(!errors.contains(FormField::Password));
    }

    #[test]
    fn password_fields_are_ignored_without_old_password() {
        let payload =
            validate_and_assemble(input("Ana", "ana@x.com", "", "new1", "other")).unwrap();
        assert!(!payload.changes_password());

        let absent = ProfileUpdateInput::new("Ana", "ana@x.com")
            .with_password("new1")
            .with_password_confirmation("");
        assert!(validate_and_assemble(absent).unwrap().password_change.is_none());
    }

    #[test]
    fn full_password_change_carries_five_fields() {
        let payload =
            validate_and_assemble(input("Ana", "ana@x.com", "old1", "new1", "new1")).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Ana",
                "email": "ana@x.com",
                "old_password": "old1",
                "password": "new1",
                "password_confirmation": "new1"
            })
        );
    }

    #[test]
    fn whitespace_counts_as_content() {
        let payload =
            validate_and_assemble(input(" ", "ana@x.com", " ", " ", " ")).unwrap();
        assert!(payload.changes_password());
    }

    #[test]
    fn accented_email_is_accepted() {
        let payload = validate_and_assemble(ProfileUpdateInput::new("João", "joão@exemplo.com.br"))
            .unwrap();
        assert_eq!(payload.email, "joão@exemplo.com.br");

        let errors = validate_and_assemble(ProfileUpdateInput::new("Ana", "a@b.123")).unwrap_err();
        assert_eq!(
            errors.kind_of(FormField::Email),
            Some(FieldErrorKind::InvalidFormat)
        );
    }
}
