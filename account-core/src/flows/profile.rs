use std::sync::Arc;

use account_model::{ProfileUpdateInput, User};
use tracing::{info, warn};

use crate::api::AccountApi;
use crate::error::Result;
use crate::profile::validate_and_assemble;
use crate::session::SessionStore;

/// Profile editor submit: validate, `PUT profile`, store the returned user.
#[derive(Clone)]
pub struct ProfileFlow {
    api: Arc<dyn AccountApi>,
    session: SessionStore,
}

impl std::fmt::Debug for ProfileFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileFlow").finish_non_exhaustive()
    }
}

impl ProfileFlow {
    pub fn new(api: Arc<dyn AccountApi>, session: SessionStore) -> Self {
        Self { api, session }
    }

    pub async fn submit(&self, input: ProfileUpdateInput) -> Result<User> {
        let payload = validate_and_assemble(input)?;

        let user = self
            .api
            .update_profile(&payload)
            .await
            .inspect_err(|err| warn!(error = %err, "profile update failed"))?;

        self.session.update_user(user.clone()).await;
        info!(
            user_id = %user.id,
            password_changed = payload.changes_password(),
            "profile updated"
        );
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAccountApi;
    use crate::error::{SubmitError, TransportError};
    use crate::validation::{FieldErrorKind, FormField};
    use account_model::UserId;

    fn session_for(id: UserId) -> SessionStore {
        SessionStore::signed_in(User::new(id, "Ana", "ana@x.com"))
    }

    #[tokio::test]
    async fn successful_update_refreshes_the_session() {
        let id = UserId::new();
        let mut api = MockAccountApi::new();
        api.expect_update_profile()
            .withf(|payload| payload.name == "Ana Maria" && !payload.changes_password())
            .times(1)
            .returning(move |payload| Ok(User::new(id, payload.name.clone(), payload.email.clone())));

        let session = session_for(id);
        let flow = ProfileFlow::new(Arc::new(api), session.clone());

        let user = flow
            .submit(ProfileUpdateInput::new("Ana Maria", "ana@x.com").with_password("ignored"))
            .await
            .unwrap();

        assert_eq!(user.name, "Ana Maria");
        assert_eq!(session.current_user().await.unwrap().name, "Ana Maria");
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_api() {
        let mut api = MockAccountApi::new();
        api.expect_update_profile().never();

        let session = session_for(UserId::new());
        let flow = ProfileFlow::new(Arc::new(api), session.clone());

        let err = flow
            .submit(
                ProfileUpdateInput::new("Ana", "ana@x.com")
                    .with_old_password("old1")
                    .with_password("new1")
                    .with_password_confirmation("new2"),
            )
            .await
            .unwrap_err();

        let errors = err.field_errors().expect("validation failure");
        assert_eq!(
            errors.kind_of(FormField::PasswordConfirmation),
            Some(FieldErrorKind::Mismatch)
        );
        assert_eq!(session.current_user().await.unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn transport_failure_leaves_the_session_alone() {
        let mut api = MockAccountApi::new();
        api.expect_update_profile().times(1).returning(|_| {
            Err(TransportError::Status {
                status: 400,
                body: "Old password does not match".into(),
            })
        });

        let session = session_for(UserId::new());
        let flow = ProfileFlow::new(Arc::new(api), session.clone());

        let err = flow
            .submit(ProfileUpdateInput::new("Someone Else", "ana@x.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SubmitError::TransportFailed(TransportError::Status { status: 400, .. })
        ));
        assert_eq!(session.current_user().await.unwrap().name, "Ana");
    }
}
