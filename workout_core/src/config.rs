//! Configuration file support for the workout calculator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/workout/config.toml`.

use crate::batch::{BatchOptions, UnknownCodePolicy};
use crate::message::OutputFormat;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub batch: BatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Batch processing configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct BatchConfig {
    #[serde(default)]
    pub unknown_code_policy: UnknownCodePolicy,
}

/// Output configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            config_path => {
                tracing::info!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if the platform has a config directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("workout").join("config.toml"))
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Batch options described by this configuration
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            policy: self.batch.unknown_code_policy,
            format: self.output.format,
        }
    }
}
