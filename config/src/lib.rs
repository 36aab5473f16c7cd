//! # Configuration Management for QueryHaus
//!
//! This crate provides the configuration structures that control how QueryHaus
//! renders query text: the time zone used for time-range literals, the escaping
//! strategy applied to condition columns and values, and the defaults used by
//! the aggregate shorthands.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{EscapeStrategy, QueryConfig, TimeZoneSetting};
//!
//! let query_config = QueryConfig::new(
//!     TimeZoneSetting::Utc,
//!     EscapeStrategy::InfluxLiteral,
//!     "value".to_string(),
//!     95,
//! );
//! assert_eq!(query_config.default_percentile, 95);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [query]
//! time_zone = "utc"
//! escape = "percent_encode"
//! default_field = "value"
//! default_percentile = 95
//! ```
//!
//! A fixed offset is written as a table:
//! ```toml
//! [query]
//! time_zone = { fixed = { offset_seconds = 3600 } }
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from QUERYHAUS_CONFIG or ./queryhaus.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./queryhaus.toml";
const CONFIG_PATH_ENV: &str = "QUERYHAUS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub query: QueryConfig,
}

/// Time zone used when formatting epoch seconds into time-range literals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeZoneSetting {
    #[default]
    Utc,
    /// The zone of the process running the builder
    Local,
    /// Fixed offset east of UTC
    Fixed { offset_seconds: i32 },
}

/// How condition columns and values are escaped before being embedded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeStrategy {
    /// Percent-encode columns and values
    #[default]
    PercentEncode,
    /// Quote columns as identifiers and backslash-escape quotes and backslashes in values
    InfluxLiteral,
}

/// Query rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub time_zone: TimeZoneSetting,
    pub escape: EscapeStrategy,
    pub default_field: String,
    pub default_percentile: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            time_zone: TimeZoneSetting::Utc,
            escape: EscapeStrategy::PercentEncode,
            default_field: "value".to_string(),
            default_percentile: 95,
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let config = if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH
            )))
        }?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        #[cfg(feature = "debug-logging")]
        tracing::debug!("Loading query configuration from {}", path.display());

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        self.query.validate()
    }
}

impl QueryConfig {
    /// Largest fixed offset accepted, one second short of a day
    const MAX_OFFSET_SECONDS: i32 = 86_399;

    /// Create a new query configuration
    pub fn new(
        time_zone: TimeZoneSetting,
        escape: EscapeStrategy,
        default_field: String,
        default_percentile: u32,
    ) -> Self {
        Self {
            time_zone,
            escape,
            default_field,
            default_percentile,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_field.is_empty() {
            return Err(ConfigError::Invalid(
                "Query default_field cannot be empty".to_string(),
            ));
        }
        if self.default_percentile == 0 || self.default_percentile > 100 {
            return Err(ConfigError::Invalid(
                "Query default_percentile must be between 1 and 100".to_string(),
            ));
        }
        if let TimeZoneSetting::Fixed { offset_seconds } = self.time_zone {
            if offset_seconds.abs() > Self::MAX_OFFSET_SECONDS {
                return Err(ConfigError::Invalid(format!(
                    "Query time_zone offset {} is outside +/-{} seconds",
                    offset_seconds,
                    Self::MAX_OFFSET_SECONDS
                )));
            }
        }

        Ok(())
    }
}
