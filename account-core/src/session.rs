//! In-memory session state shared between the screens.

use std::sync::Arc;

use account_model::{User, UserId};
use tokio::sync::RwLock;
use tracing::debug;

/// Handle to the signed-in user. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    user: Arc<RwLock<Option<User>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that starts signed in as `user`.
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Arc::new(RwLock::new(Some(user))),
        }
    }

    pub async fn sign_in(&self, user: User) {
        debug!(user_id = %user.id, "session signed in");
        *self.user.write().await = Some(user);
    }

    pub async fn sign_out(&self) {
        *self.user.write().await = None;
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn user_id(&self) -> Option<UserId> {
        self.user.read().await.as_ref().map(|user| user.id)
    }

    pub async fn is_signed_in(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// Replace the stored record with the one the API just returned.
    pub async fn update_user(&self, user: User) {
        debug!(user_id = %user.id, "session user updated");
        *self.user.write().await = Some(user);
    }
}
