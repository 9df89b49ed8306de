//! Sign-up form policy.

use account_model::{SignUpInput, SignUpPayload};
use tracing::debug;

use crate::validation::{self, FieldError, FieldErrors, FormField};

/// Minimum password length accepted by the sign-up form unless configured.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

/// Tunable parts of the sign-up rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpRules {
    /// Counted in characters, not bytes.
    pub min_password_len: usize,
}

impl Default for SignUpRules {
    fn default() -> Self {
        Self {
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

/// Validate a sign-up submission and build the account creation body.
///
/// An empty password is reported as too short rather than missing.
pub fn validate_sign_up(
    input: SignUpInput,
    rules: &SignUpRules,
) -> Result<SignUpPayload, FieldErrors> {
    let mut errors = FieldErrors::new();

    validation::require(&mut errors, FormField::Name, &input.name);
    validation::check_email(&mut errors, &input.email);
    if input.password.char_count() < rules.min_password_len {
        errors.record(
            FormField::Password,
            FieldError::too_short(rules.min_password_len),
        );
    }

    if !errors.is_empty() {
        debug!(count = errors.len(), "sign-up rejected");
    }

    let SignUpInput {
        name,
        email,
        password,
    } = input;
    errors.into_result(SignUpPayload {
        name,
        email,
        password,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrorKind;

    #[test]
    fn accepts_a_complete_form() {
        let payload =
            validate_sign_up(SignUpInput::new("Ana", "ana@x.com", "secret"), &SignUpRules::default())
                .unwrap();
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.password.expose(), "secret");
    }

    #[test]
    fn short_and_empty_passwords_are_too_short() {
        let rules = SignUpRules::default();
        for password in ["", "12345"] {
            let errors =
                validate_sign_up(SignUpInput::new("Ana", "ana@x.com", password), &rules)
                    .unwrap_err();
            assert_eq!(
                errors.kind_of(FormField::Password),
                Some(FieldErrorKind::TooShort)
            );
            assert_eq!(
                errors.get(FormField::Password).unwrap().message,
                "Use at least 6 characters"
            );
        }
    }

    #[test]
    fn minimum_counts_characters() {
        let rules = SignUpRules {
            min_password_len: 4,
        };
        assert!(validate_sign_up(SignUpInput::new("Ana", "ana@x.com", "çãõé"), &rules).is_ok());
    }

    #[test]
    fn collects_every_failure() {
        let errors = validate_sign_up(SignUpInput::new("", "", "1"), &SignUpRules::default())
            .unwrap_err();
        assert_eq!(errors.kind_of(FormField::Name), Some(FieldErrorKind::Required));
        assert_eq!(errors.kind_of(FormField::Email), Some(FieldErrorKind::Required));
        assert_eq!(
            errors.kind_of(FormField::Password),
            Some(FieldErrorKind::TooShort)
        );
    }
}
