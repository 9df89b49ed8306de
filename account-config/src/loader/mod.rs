//! Resolve a [`ClientConfig`] from defaults, an optional TOML file and the
//! environment, in increasing order of precedence.

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use account_core::sign_up::DEFAULT_MIN_PASSWORD_LEN;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_LOG_FILTER, ENV_API_TIMEOUT,
    ENV_API_URL, ENV_CONFIG_PATH, ENV_LOG, ENV_MIN_PASSWORD_LEN, ENV_SKIP_DOTENV,
    FILE_API_BASE_URL, FILE_API_TIMEOUT, FILE_LOG_FILTER, FILE_MIN_PASSWORD_LEN,
};
use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{ApiConfig, ClientConfig, ConfigMetadata, FormsConfig, LoggingConfig};
use crate::util::parse_bool_var;
use crate::validation::{ConfigWarnings, collect_warnings};
use error::ConfigLoadError;

/// A loaded configuration together with the guard-rail warnings it raised.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ClientConfig,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    skip_dotenv: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this TOML file instead of the one named by `ACCOUNT_CONFIG_PATH`.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Do not read a `.env` file from the working directory.
    pub fn without_dotenv(mut self) -> Self {
        self.skip_dotenv = true;
        self
    }

    /// Load using the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = if self.skip_dotenv || parse_bool_var(ENV_SKIP_DOTENV) == Some(true) {
            false
        } else {
            dotenvy::dotenv().is_ok()
        };

        let config_path = self
            .config_path
            .clone()
            .or_else(|| std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from));

        let mut load = self.resolve(config_path.as_deref(), EnvConfig::from_env())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Load from an explicit file path and environment snapshot.
    pub fn resolve(
        &self,
        config_path: Option<&Path>,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let file = match config_path {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };

        let base_url = match sourced(
            env.api_url,
            ENV_API_URL,
            file.api.base_url,
            FILE_API_BASE_URL,
        ) {
            Some((raw, key)) => parse_base_url(&raw, key)?,
            None => parse_base_url(DEFAULT_API_BASE_URL, ENV_API_URL)?,
        };

        let timeout = match sourced(
            env.api_timeout,
            ENV_API_TIMEOUT,
            file.api.timeout,
            FILE_API_TIMEOUT,
        ) {
            Some((raw, key)) => parse_timeout(&raw, key)?,
            None => Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        };

        let (min_password_len, min_key) = match env.min_password_len {
            Some(raw) => {
                let len = raw.parse::<usize>().map_err(|err| {
                    ConfigLoadError::invalid(ENV_MIN_PASSWORD_LEN, err.to_string())
                })?;
                (len, ENV_MIN_PASSWORD_LEN)
            }
            None => (
                file.forms.min_password_len.unwrap_or(DEFAULT_MIN_PASSWORD_LEN),
                FILE_MIN_PASSWORD_LEN,
            ),
        };
        if min_password_len == 0 {
            return Err(ConfigLoadError::invalid(
                min_key,
                "minimum password length must be at least 1",
            ));
        }

        let (filter, filter_key) =
            sourced(env.log_filter, ENV_LOG, file.logging.filter, FILE_LOG_FILTER)
                .unwrap_or_else(|| (DEFAULT_LOG_FILTER.to_string(), ENV_LOG));
        EnvFilter::try_new(&filter)
            .map_err(|err| ConfigLoadError::invalid(filter_key, err.to_string()))?;

        let config = ClientConfig {
            api: ApiConfig {
                base_url,
                timeout,
                bearer_token: env.api_token.or(file.api.bearer_token),
            },
            forms: FormsConfig { min_password_len },
            logging: LoggingConfig { filter },
            metadata: ConfigMetadata {
                config_path: config_path.map(Path::to_path_buf),
                env_file_loaded: false,
            },
        };

        let warnings = collect_warnings(&config);
        debug!(api = ?config.api, warnings = warnings.len(), "client config resolved");
        Ok(ConfigLoad { config, warnings })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The environment value if set, else the file value, tagged with the key it
/// came from.
fn sourced(
    env: Option<String>,
    env_key: &'static str,
    file: Option<String>,
    file_key: &'static str,
) -> Option<(String, &'static str)> {
    env.map(|value| (value, env_key))
        .or_else(|| file.map(|value| (value, file_key)))
}

fn parse_base_url(raw: &str, key: &'static str) -> Result<Url, ConfigLoadError> {
    let url = Url::parse(raw).map_err(|err| ConfigLoadError::invalid(key, err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigLoadError::invalid(
            key,
            format!("unsupported scheme `{}`", url.scheme()),
        ));
    }
    Ok(url)
}

fn parse_timeout(raw: &str, key: &'static str) -> Result<Duration, ConfigLoadError> {
    let timeout = humantime::parse_duration(raw)
        .map_err(|err| ConfigLoadError::invalid(key, err.to_string()))?;
    if timeout.is_zero() {
        return Err(ConfigLoadError::invalid(
            key,
            "timeout must be greater than zero",
        ));
    }
    Ok(timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file_or_env() {
        let load = ConfigLoader::new()
            .resolve(None, EnvConfig::default())
            .unwrap();
        assert_eq!(load.config.api.base_url.as_str(), "http://localhost:3333/");
        assert_eq!(load.config.api.timeout, Duration::from_secs(30));
        assert_eq!(load.config.forms.min_password_len, 6);
        assert_eq!(load.config.logging.filter, "info");
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn rejects_bad_values() {
        let loader = ConfigLoader::new();
        let cases = [
            EnvConfig {
                api_url: Some("not a url".into()),
                ..EnvConfig::default()
            },
            EnvConfig {
                api_url: Some("ftp://files.example.com".into()),
                ..EnvConfig::default()
            },
            EnvConfig {
                api_timeout: Some("0s".into()),
                ..EnvConfig::default()
            },
            EnvConfig {
                api_timeout: Some("soon".into()),
                ..EnvConfig::default()
            },
            EnvConfig {
                min_password_len: Some("0".into()),
                ..EnvConfig::default()
            },
            EnvConfig {
                min_password_len: Some("six".into()),
                ..EnvConfig::default()
            },
        ];
        for env in cases {
            assert!(matches!(
                loader.resolve(None, env),
                Err(ConfigLoadError::InvalidValue { .. })
            ));
        }
    }
}
