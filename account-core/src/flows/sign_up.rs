use std::sync::Arc;

use account_model::SignUpInput;
use tracing::{info, warn};

use crate::api::AccountApi;
use crate::error::Result;
use crate::sign_up::{SignUpRules, validate_sign_up};

/// Sign-up submit: validate, `POST users`.
#[derive(Clone)]
pub struct SignUpFlow {
    api: Arc<dyn AccountApi>,
    rules: SignUpRules,
}

impl std::fmt::Debug for SignUpFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpFlow")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl SignUpFlow {
    pub fn new(api: Arc<dyn AccountApi>, rules: SignUpRules) -> Self {
        Self { api, rules }
    }

    pub fn rules(&self) -> &SignUpRules {
        &self.rules
    }

    pub async fn submit(&self, input: SignUpInput) -> Result<()> {
        let payload = validate_sign_up(input, &self.rules)?;

        self.api
            .register(&payload)
            .await
            .inspect_err(|err| warn!(error = %err, "sign-up request failed"))?;

        info!("account created");
        Ok(())
    }
}
