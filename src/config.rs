//! # Kinematics Configuration
//!
//! Startup configuration for the kinematics component, loaded from TOML.
//!
//! ## Example: TOML Configuration
//!
//! ```toml
//! [kinematics]
//! module = "5axiskins"
//! pivot_length = 250.0
//! tool_length = 0.0
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every field is optional; missing fields take the defaults shown above.
//! `tool_length` only seeds the tool-offset pin, the host overwrites it
//! while running.

// src/config.rs - Single configuration file
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kinematics::{DEFAULT_PIVOT_LENGTH, KinsParams};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub kinematics: KinematicsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Kinematics module selection and initial scalar values.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KinematicsConfig {
    #[serde(default = "default_module")]
    pub module: String,
    #[serde(default = "default_pivot_length")]
    pub pivot_length: f64,
    #[serde(default)]
    pub tool_length: f64,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            module: default_module(),
            pivot_length: default_pivot_length(),
            tool_length: 0.0,
        }
    }
}

impl KinematicsConfig {
    pub fn params(&self) -> KinsParams {
        KinsParams {
            pivot_length: self.pivot_length,
            tool_length: self.tool_length,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl LoggingConfig {
    pub fn tracing_level(&self) -> Option<tracing::Level> {
        self.level.parse().ok()
    }
}

impl Config {
    /// Validate lengths and log level
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.kinematics.pivot_length.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "pivot_length must be finite, got {}",
                self.kinematics.pivot_length
            )));
        }
        if !self.kinematics.tool_length.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "tool_length must be finite, got {}",
                self.kinematics.tool_length
            )));
        }
        if self.logging.tracing_level().is_none() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}

// Default value functions
fn default_module() -> String { "5axiskins".to_string() }
fn default_pivot_length() -> f64 { DEFAULT_PIVOT_LENGTH }
fn default_log_level() -> String { "info".to_string() }

/// Load configuration from a TOML file at the given path.
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config: Config = match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to parse config TOML: {}", e);
                return Err(ConfigError::Toml(e));
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file '{}': {}", path, e);
            return Err(ConfigError::Io(e));
        }
    };
    config.validate().inspect_err(|e| tracing::error!("{}", e))?;
    Ok(config)
}
