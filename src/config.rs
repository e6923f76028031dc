// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration management.
//!
//! Configuration is loaded from multiple sources with the following
//! priority (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. config.yaml file
//! 3. Environment variables (CLIFFORD_RBM_*)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Phase-insensitive comparison tolerance
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Resource limits for sequence requests
    #[serde(default)]
    pub limits: ResourceLimits,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            limits: ResourceLimits::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = config_path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = serde_yaml::from_str(&content)?;
            }
        } else {
            for path in &["config.yaml", "config.yml"] {
                let path = Path::new(path);
                if path.exists() {
                    let content = std::fs::read_to_string(path)?;
                    config = serde_yaml::from_str(&content)?;
                    break;
                }
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("CLIFFORD_RBM_TOLERANCE") {
            if let Ok(tol) = val.parse() {
                self.tolerance = tol;
            }
        }
        if let Ok(val) = env::var("CLIFFORD_RBM_MAX_SEQUENCE_LENGTH") {
            if let Ok(len) = val.parse() {
                self.limits.max_sequence_length = len;
            }
        }
        if let Ok(val) = env::var("CLIFFORD_RBM_LOG_LEVEL") {
            self.logging.level = val;
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::Config("tolerance must be finite and > 0".into()));
        }
        if self.limits.max_sequence_length == 0 {
            return Err(Error::Config("max_sequence_length cannot be 0".into()));
        }
        // Above ~1e-2 distinct Clifford elements start comparing equal
        // and inverse lookup becomes ambiguous.
        if self.tolerance > 1e-2 {
            tracing::warn!(
                tolerance = self.tolerance,
                "tolerance is loose enough to risk matching multiple group elements"
            );
        }
        Ok(())
    }
}

/// Resource limits for sequence requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// Maximum number of random draws per sequence
    #[serde(default = "default_max_sequence_length")]
    pub max_sequence_length: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_sequence_length: default_max_sequence_length(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_tolerance() -> f64 {
    1e-5
}

fn default_max_sequence_length() -> usize {
    4096
}

fn default_log_level() -> String {
    "info".into()
}
