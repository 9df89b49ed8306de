pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use account_core::api::HttpApiSettings;
use account_core::sign_up::SignUpRules;
use url::Url;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub forms: FormsConfig,
    pub logging: LoggingConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub bearer_token: Option<String>,
}

impl ApiConfig {
    pub fn http_settings(&self) -> HttpApiSettings {
        HttpApiSettings {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            bearer_token: self.bearer_token.clone(),
        }
    }

    pub fn is_plain_http(&self) -> bool {
        self.base_url.scheme() == "http"
    }

    pub fn is_loopback(&self) -> bool {
        match self.base_url.host() {
            Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
            Some(url::Host::Ipv4(addr)) => addr.is_loopback(),
            Some(url::Host::Ipv6(addr)) => addr.is_loopback(),
            None => false,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("has_token", &self.bearer_token.is_some())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct FormsConfig {
    pub min_password_len: usize,
}

impl FormsConfig {
    pub fn sign_up_rules(&self) -> SignUpRules {
        SignUpRules {
            min_password_len: self.min_password_len,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
