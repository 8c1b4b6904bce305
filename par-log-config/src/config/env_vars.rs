//! Environment variable overrides for `LoggerConfig`.
//!
//! Overrides are applied after the config file is read, so a one-off
//! `PAR_LOG_LEVEL=debug` wins over the file without editing it.

use super::LoggerConfig;
use crate::error::ConfigError;
use crate::types::LogLevel;

/// Minimum level override (`trace`, `debug`, `info`, ...)
pub const ENV_LEVEL: &str = "PAR_LOG_LEVEL";
/// strftime pattern override; set to an empty string to disable timestamps
pub const ENV_TIME_FORMAT: &str = "PAR_LOG_TIME_FORMAT";
/// Progress rate limit override in milliseconds
pub const ENV_PROGRESS_INTERVAL_MS: &str = "PAR_LOG_PROGRESS_INTERVAL_MS";
/// Any non-empty value disables styling (<https://no-color.org>)
pub const ENV_NO_COLOR: &str = "NO_COLOR";

impl LoggerConfig {
    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LEVEL) {
            self.min_level = level.parse::<LogLevel>()?;
            log::debug!("{ENV_LEVEL} override: min_level = {}", self.min_level);
        }

        if let Some(format) = lookup(ENV_TIME_FORMAT) {
            log::debug!("{ENV_TIME_FORMAT} override: time_format = {format:?}");
            self.time_format = Some(format);
        }

        if let Some(ms) = lookup(ENV_PROGRESS_INTERVAL_MS) {
            let ms = ms.trim().parse::<u64>().map_err(|e| {
                ConfigError::Validation(format!("{ENV_PROGRESS_INTERVAL_MS}='{ms}': {e}"))
            })?;
            self.progress_interval_ms = Some(ms);
        }

        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            self.colors = false;
        }

        self.validate()
    }
}
