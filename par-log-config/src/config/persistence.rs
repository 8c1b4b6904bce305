//! Config file location and loading.

use super::LoggerConfig;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

impl LoggerConfig {
    /// Directory holding par-log configuration (`<config_dir>/par-log`).
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("par-log")
    }

    /// Default config file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load from the default path, falling back to defaults when the file
    /// does not exist. Environment overrides are applied on top.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            log::debug!("Config file {:?} not found, using defaults", config_path);
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading logger config from {:?}", path);

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file deserializes as YAML null, not as an empty mapping
        let config: LoggerConfig = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(&contents)?
        };
        config.validate()?;
        Ok(config)
    }
}
