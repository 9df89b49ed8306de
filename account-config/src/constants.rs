//! Defaults and environment keys.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_CONFIG_PATH: &str = "ACCOUNT_CONFIG_PATH";
pub const ENV_SKIP_DOTENV: &str = "ACCOUNT_SKIP_DOTENV";
pub const ENV_API_URL: &str = "ACCOUNT_API_URL";
pub const ENV_API_TIMEOUT: &str = "ACCOUNT_API_TIMEOUT";
pub const ENV_API_TOKEN: &str = "ACCOUNT_API_TOKEN";
pub const ENV_MIN_PASSWORD_LEN: &str = "ACCOUNT_MIN_PASSWORD_LEN";
pub const ENV_LOG: &str = "ACCOUNT_LOG";

// Keys as they appear in the TOML file, for error reporting.
pub const FILE_API_BASE_URL: &str = "api.base_url";
pub const FILE_API_TIMEOUT: &str = "api.timeout";
pub const FILE_MIN_PASSWORD_LEN: &str = "forms.min_password_len";
pub const FILE_LOG_FILTER: &str = "logging.filter";

/// Every key the loader reads, for tests and diagnostics.
pub const MANAGED_KEYS: &[&str] = &[
    ENV_CONFIG_PATH,
    ENV_SKIP_DOTENV,
    ENV_API_URL,
    ENV_API_TIMEOUT,
    ENV_API_TOKEN,
    ENV_MIN_PASSWORD_LEN,
    ENV_LOG,
];
