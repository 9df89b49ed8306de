use account_model::{AvatarUpload, ProfileUpdatePayload, SignUpPayload, User};
use async_trait::async_trait;

use crate::error::TransportError;

/// Calls the forms make against the account API.
///
/// The flows only depend on this trait so tests and alternative transports
/// can stand in for [`HttpAccountApi`](super::HttpAccountApi).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Save name/email and, when present, the password change. Returns the
    /// updated user record.
    async fn update_profile(&self, payload: &ProfileUpdatePayload) -> Result<User, TransportError>;

    /// Create an account. The response body is not read.
    async fn register(&self, payload: &SignUpPayload) -> Result<(), TransportError>;

    /// Replace the current user's avatar. Returns the updated user record.
    async fn upload_avatar(&self, upload: AvatarUpload) -> Result<User, TransportError>;
}
