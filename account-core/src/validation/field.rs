use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Form fields a validation message can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    OldPassword,
    Password,
    PasswordConfirmation,
}

impl FormField {
    /// Field name as the UI layer registers it.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::OldPassword => "old_password",
            FormField::Password => "password",
            FormField::PasswordConfirmation => "password_confirmation",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    InvalidFormat,
    Mismatch,
    TooShort,
}

/// A single inline message for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required(field: FormField) -> Self {
        let message = match field {
            FormField::Name => "Name is required",
            FormField::Email => "E-mail is required",
            _ => "This field is required",
        };
        Self::new(FieldErrorKind::Required, message)
    }

    pub fn invalid_email() -> Self {
        Self::new(FieldErrorKind::InvalidFormat, "Enter a valid e-mail address")
    }

    pub fn confirmation_mismatch() -> Self {
        Self::new(
            FieldErrorKind::Mismatch,
            "Password confirmation does not match",
        )
    }

    pub fn too_short(min_chars: usize) -> Self {
        Self::new(
            FieldErrorKind::TooShort,
            format!("Use at least {min_chars} characters"),
        )
    }
}

/// Field-error mapping handed to the UI for inline display.
///
/// Holds at most one message per field. Recording a second error for a field
/// that already has one is ignored, so rules must be checked in priority
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` for `field` unless the field already has one.
    pub fn record(&mut self, field: FormField, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn kind_of(&self, field: FormField) -> Option<FieldErrorKind> {
        self.errors.get(&field).map(|error| error.kind)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.keys().copied()
    }

    /// Errors in field order.
    pub fn iter(&self) -> FieldErrorsIter<'_> {
        FieldErrorsIter {
            inner: self.errors.iter(),
        }
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", error.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Iterator over the recorded errors of a [`FieldErrors`].
#[derive(Debug, Clone)]
pub struct FieldErrorsIter<'a> {
    inner: std::collections::btree_map::Iter<'a, FormField, FieldError>,
}

impl<'a> Iterator for FieldErrorsIter<'a> {
    type Item = (FormField, &'a FieldError);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(field, error)| (*field, error))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FieldErrorsIter<'_> {}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (FormField, &'a FieldError);
    type IntoIter = FieldErrorsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.record(
            FormField::PasswordConfirmation,
            FieldError::required(FormField::PasswordConfirmation),
        );
        errors.record(
            FormField::PasswordConfirmation,
            FieldError::confirmation_mismatch(),
        );

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.kind_of(FormField::PasswordConfirmation),
            Some(FieldErrorKind::Required)
        );
    }

    #[test]
    fn into_result_only_fails_when_something_was_recorded() {
        assert_eq!(FieldErrors::new().into_result(7), Ok(7));

        let mut errors = FieldErrors::new();
        errors.record(FormField::Name, FieldError::required(FormField::Name));
        assert!(errors.into_result(7).is_err());
    }

    #[test]
    fn serializes_as_field_name_map() {
        let mut errors = FieldErrors::new();
        errors.record(FormField::Email, FieldError::invalid_email());
        errors.record(FormField::Name, FieldError::required(FormField::Name));

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "name": {"kind": "required", "message": "Name is required"},
                "email": {"kind": "invalid_format", "message": "Enter a valid e-mail address"}
            })
        );
    }

    #[test]
    fn iter_and_for_loop_yield_the_same_items() {
        let mut errors = FieldErrors::new();
        errors.record(FormField::Password, FieldError::too_short(6));
        errors.record(FormField::Name, FieldError::required(FormField::Name));

        let from_iter: Vec<(FormField, &FieldError)> = errors.iter().collect();
        let mut from_loop = Vec::new();
        for (field, error) in &errors {
            from_loop.push((field, error));
        }

        assert_eq!(from_iter, from_loop);
        assert_eq!(from_iter[0].0, FormField::Name);
        assert_eq!(errors.iter().len(), 2);
    }

    #[test]
    fn display_lists_every_field() {
        let mut errors = FieldErrors::new();
        errors.record(FormField::Name, FieldError::required(FormField::Name));
        errors.record(FormField::Password, FieldError::too_short(6));
        assert_eq!(
            errors.to_string(),
            "name: Name is required; password: Use at least 6 characters"
        );
    }
}
