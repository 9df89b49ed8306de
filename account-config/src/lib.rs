//! Configuration for the account forms client.
//!
//! Centralizes config loading (defaults, TOML file, `.env`, environment),
//! guard-rail warnings, and `tracing` setup, and converts the result into
//! the settings types `account-core` consumes.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod telemetry;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{ApiConfig, ClientConfig, ConfigMetadata, FormsConfig, LoggingConfig};
pub use telemetry::init_tracing;
pub use validation::{ConfigWarning, ConfigWarnings};
