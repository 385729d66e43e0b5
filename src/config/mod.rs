#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::adapters::http::DEFAULT_RESOLVER_ENDPOINT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_STORE_PATH: &str = "./roman-calc-store.json";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Effective settings: built-in defaults, overlaid by the TOML file, overlaid
/// by explicit CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub resolver_endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub store_path: String,
    pub log_level: Option<String>,
    pub log_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolver_endpoint: DEFAULT_RESOLVER_ENDPOINT.to_string(),
            timeout_seconds: None,
            store_path: DEFAULT_STORE_PATH.to_string(),
            log_level: None,
            log_format: "compact".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            resolver_endpoint: config
                .resolver
                .endpoint
                .clone()
                .unwrap_or(defaults.resolver_endpoint),
            timeout_seconds: config.resolver.timeout_seconds,
            store_path: config.store.path.clone().unwrap_or(defaults.store_path),
            log_level: config.logging.level.clone(),
            log_format: config.logging.format.clone().unwrap_or(defaults.log_format),
        }
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.log_format).unwrap_or_default()
    }
}

impl ConfigProvider for Settings {
    fn resolver_endpoint(&self) -> &str {
        &self.resolver_endpoint
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn store_path(&self) -> &str {
        &self.store_path
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("resolver.endpoint", &self.resolver_endpoint)?;
        validate_path("store.path", &self.store_path)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_range("resolver.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        if LogFormat::parse(&self.log_format).is_none() {
            return Err(CalcError::InvalidConfigValueError {
                field: "logging.format".to_string(),
                value: self.log_format.clone(),
                reason: "Supported formats: compact, json".to_string(),
            });
        }

        Ok(())
    }
}
