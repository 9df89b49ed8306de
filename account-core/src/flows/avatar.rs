use std::sync::Arc;

use account_model::{AvatarSelection, AvatarUpload, User};
use tracing::{debug, info, warn};

use crate::api::AccountApi;
use crate::error::{Result, SubmitError};
use crate::session::SessionStore;

/// Avatar change: name the picked image after the current user, upload it,
/// store the returned user.
#[derive(Clone)]
pub struct AvatarFlow {
    api: Arc<dyn AccountApi>,
    session: SessionStore,
}

impl std::fmt::Debug for AvatarFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarFlow").finish_non_exhaustive()
    }
}

impl AvatarFlow {
    pub fn new(api: Arc<dyn AccountApi>, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// `Ok(None)` when the picker was dismissed; nothing is sent then.
    pub async fn submit(&self, selection: AvatarSelection) -> Result<Option<User>> {
        let bytes = match selection {
            AvatarSelection::Cancelled => {
                debug!("avatar picker cancelled");
                return Ok(None);
            }
            AvatarSelection::Failed(reason) => {
                warn!(%reason, "avatar picker failed");
                return Err(SubmitError::PickerFailed(reason));
            }
            AvatarSelection::Picked(bytes) => bytes,
        };

        let user_id = self.session.user_id().await.ok_or(SubmitError::NotSignedIn)?;
        let upload = AvatarUpload::for_user(&user_id, bytes);

        let user = self
            .api
            .upload_avatar(upload)
            .await
            .inspect_err(|err| warn!(error = %err, "avatar upload failed"))?;

        self.session.update_user(user.clone()).await;
        info!(user_id = %user.id, "avatar updated");
        Ok(Some(user))
    }
}
