use serde::{Deserialize, Serialize};

use crate::constants::{
    ENV_API_TIMEOUT, ENV_API_TOKEN, ENV_API_URL, ENV_LOG, ENV_MIN_PASSWORD_LEN,
};
use crate::util::non_blank;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub forms: FileFormsConfig,
    #[serde(default)]
    pub logging: FileLoggingConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Humantime duration such as `"30s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileFormsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_password_len: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Environment-derived configuration values, still unparsed.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub api_url: Option<String>,
    pub api_timeout: Option<String>,
    pub api_token: Option<String>,
    pub min_password_len: Option<String>,
    pub log_filter: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_url: non_blank(lookup(ENV_API_URL)),
            api_timeout: non_blank(lookup(ENV_API_TIMEOUT)),
            api_token: non_blank(lookup(ENV_API_TOKEN)),
            min_password_len: non_blank(lookup(ENV_MIN_PASSWORD_LEN)),
            log_filter: non_blank(lookup(ENV_LOG)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn file_config_sections_are_optional() {
        let parsed: FileConfig = toml::from_str("[api]\nbase_url = \"https://api.example.com\"\n").unwrap();
        assert_eq!(parsed.api.base_url.as_deref(), Some("https://api.example.com"));
        assert!(parsed.forms.min_password_len.is_none());
        assert!(parsed.logging.filter.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("[api]\nbase = \"x\"\n").is_err());
    }

    #[test]
    fn env_lookup_ignores_blank_values() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(ENV_API_URL, "  "), (ENV_API_TIMEOUT, "5s")]);
        let env = EnvConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(env.api_url, None);
        assert_eq!(env.api_timeout.as_deref(), Some("5s"));
    }
}
