//! Guard rails: settings that load fine but deserve a warning.

use account_core::sign_up::DEFAULT_MIN_PASSWORD_LEN;
use tracing::warn;

use crate::models::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Passwords would travel unencrypted to a non-local host.
    PlainHttpRemote { base_url: String },
    /// A bearer token would travel unencrypted to a non-local host.
    TokenOverPlainHttp,
    /// Sign-up accepts shorter passwords than the default.
    WeakPasswordMinimum { min_password_len: usize },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::PlainHttpRemote { base_url } => {
                write!(f, "API base URL {base_url} uses plain HTTP")
            }
            ConfigWarning::TokenOverPlainHttp => {
                f.write_str("bearer token configured for a plain HTTP API")
            }
            ConfigWarning::WeakPasswordMinimum { min_password_len } => write!(
                f,
                "sign-up minimum password length {min_password_len} is below {DEFAULT_MIN_PASSWORD_LEN}"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, warning: &ConfigWarning) -> bool {
        self.0.contains(warning)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }

    /// Emit every warning through `tracing`.
    pub fn log(&self) {
        for warning in &self.0 {
            warn!(%warning, "config guard rail");
        }
    }
}

pub(crate) fn collect_warnings(config: &ClientConfig) -> ConfigWarnings {
    let mut warnings = Vec::new();

    if config.api.is_plain_http() && !config.api.is_loopback() {
        warnings.push(ConfigWarning::PlainHttpRemote {
            base_url: config.api.base_url.to_string(),
        });
        if config.api.bearer_token.is_some() {
            warnings.push(ConfigWarning::TokenOverPlainHttp);
        }
    }

    if config.forms.min_password_len < DEFAULT_MIN_PASSWORD_LEN {
        warnings.push(ConfigWarning::WeakPasswordMinimum {
            min_password_len: config.forms.min_password_len,
        });
    }

    ConfigWarnings(warnings)
}
