//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `dewflow.toml` in the working directory. Every field has a
//! sensible default so the file is optional. The `[driver]` table carries the
//! host's flat key/value settings (`ZoneName1`, `TemperatureSysvar1`, …) and
//! is exposed to the core through the [`ConfigSource`] port.

use std::collections::BTreeMap;

use dewflow_app::ports::ConfigSource;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Flat driver key/value settings, host-convention keys.
    pub driver: BTreeMap<String, String>,
}

/// Logging configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax). When empty, the filter is
    /// derived from the driver's `DebugTrace` flag.
    pub filter: String,
}

impl Config {
    /// Load configuration from `dewflow.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or a
    /// driver value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("dewflow.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DEWFLOW_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(flag) = self.driver.get("DebugTrace") {
            if flag != "true" && flag != "false" {
                return Err(ConfigError::Validation(format!(
                    "DebugTrace must be 'true' or 'false', got '{flag}'"
                )));
            }
        }
        Ok(())
    }

    /// Whether the driver's `DebugTrace` flag is set.
    #[must_use]
    pub fn debug_trace(&self) -> bool {
        self.driver.get("DebugTrace").is_some_and(|flag| flag == "true")
    }

    /// The effective log filter: an explicit `logging.filter` wins,
    /// otherwise `DebugTrace` selects between debug and info defaults.
    #[must_use]
    pub fn log_filter(&self) -> String {
        if !self.logging.filter.is_empty() {
            return self.logging.filter.clone();
        }
        if self.debug_trace() {
            "dewflowd=debug,dewflow_app=debug,dewflow_domain=debug".to_string()
        } else {
            "info".to_string()
        }
    }
}

impl ConfigSource for Config {
    fn get(&self, key: &str) -> String {
        self.driver.get(key).cloned().unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
