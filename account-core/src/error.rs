use thiserror::Error;

use crate::validation::FieldErrors;

/// Failure of a call to the account API.
///
/// Opaque to the validators; callers surface it as a generic alert since no
/// structured detail is assumed about server rejections.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Could not reach the server: {0}")]
    Connect(String),

    /// The request could not be built (bad header, MIME type or client
    /// setup); nothing was sent.
    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status {
                status: status.as_u16(),
                body: String::new(),
            }
        } else if err.is_connect() || err.is_request() || err.is_body() {
            // Includes connections dropped mid-request.
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Result of a submit gesture that did not go through.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// One or more field rules failed; nothing was sent.
    #[error("Validation failed: {field_errors}")]
    ValidationFailed { field_errors: FieldErrors },

    /// The payload was valid but the API call failed.
    #[error("Request to the account API failed: {0}")]
    TransportFailed(#[from] TransportError),

    /// An avatar upload needs the current user's id.
    #[error("No signed-in user")]
    NotSignedIn,

    /// The image picker reported an error before anything was sent.
    #[error("Image picker failed: {0}")]
    PickerFailed(String),
}

impl SubmitError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::ValidationFailed { field_errors } => Some(field_errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for SubmitError {
    fn from(field_errors: FieldErrors) -> Self {
        SubmitError::ValidationFailed { field_errors }
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_mime_type_is_a_request_error() {
        let err = reqwest::multipart::Part::bytes(vec![1, 2, 3])
            .mime_str("not a mime type")
            .unwrap_err();
        assert!(matches!(
            TransportError::from(err),
            TransportError::Request(_)
        ));
    }

    #[test]
    fn unparseable_url_is_a_request_error() {
        let err = reqwest::Client::new().get("http://[::1").build().unwrap_err();
        assert!(matches!(
            TransportError::from(err),
            TransportError::Request(_)
        ));
    }

    #[test]
    fn validation_failure_exposes_field_errors() {
        let err = SubmitError::from(FieldErrors::new());
        assert!(err.field_errors().is_some());
        assert!(SubmitError::NotSignedIn.field_errors().is_none());
    }
}
