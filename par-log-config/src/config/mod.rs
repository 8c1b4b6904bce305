//! Logger configuration.
//!
//! `LoggerConfig` collects everything a logger needs at construction time.
//! Sub-modules add loading from disk (`persistence`) and environment
//! overrides (`env_vars`).

mod env_vars;
mod persistence;

pub use env_vars::{ENV_LEVEL, ENV_NO_COLOR, ENV_PROGRESS_INTERVAL_MS, ENV_TIME_FORMAT};

use crate::defaults;
use crate::error::ConfigError;
use crate::types::LogLevel;
use chrono::format::{Item, StrftimeItems};
use par_log_style::Style;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Construction-time settings for a logger.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```yaml
/// min_level: debug
/// time_format: "%H:%M:%S%.3f"
/// progress_interval_ms: 100
/// styles:
///   info:
///     fg: "#cccccc"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Messages ranked below this level are dropped (progress is exempt)
    #[serde(default = "crate::defaults::min_level")]
    pub min_level: LogLevel,

    /// strftime pattern for timestamps.
    ///
    /// `None` picks a short format for terminals and a dated one for files;
    /// an empty string disables timestamps.
    pub time_format: Option<String>,

    /// Override for the timestamp style (terminal output only)
    pub timestamp_style: Option<Style>,

    /// Per-level style overrides merged over the built-in styles.
    /// A style with no attributes renders that level unstyled.
    pub styles: BTreeMap<LogLevel, Style>,

    /// Trim leading/trailing whitespace from message text
    pub strip_messages: bool,

    /// Suffix appended to text shortened to fit the terminal
    #[serde(default = "crate::defaults::trim_marker")]
    pub trim_marker: String,

    /// Minimum time between accepted progress updates (none when unset or 0)
    pub progress_interval_ms: Option<u64>,

    /// Style terminal output (disabled by `NO_COLOR`)
    #[serde(default = "crate::defaults::colors")]
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: defaults::min_level(),
            time_format: None,
            timestamp_style: None,
            styles: BTreeMap::new(),
            strip_messages: false,
            trim_marker: defaults::trim_marker(),
            progress_interval_ms: None,
            colors: defaults::colors(),
        }
    }
}

impl LoggerConfig {
    /// Timestamp format to use for a sink, honouring the auto-selection rule.
    pub fn effective_time_format(&self, interactive: bool) -> &str {
        match &self.time_format {
            Some(format) => format,
            None => defaults::time_format_for(interactive),
        }
    }

    /// Minimum period between progress updates, if rate limiting is on.
    pub fn progress_interval(&self) -> Option<Duration> {
        self.progress_interval_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Reject values the logger could not render with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.time_format
            && StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        {
            return Err(ConfigError::Validation(format!(
                "time_format '{format}' is not a valid strftime pattern"
            )));
        }

        if self.trim_marker.contains(['\n', '\r']) {
            return Err(ConfigError::Validation(
                "trim_marker must not contain line breaks".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use par_log_style::Color;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Info);
        assert_eq!(config.trim_marker, "...");
        assert!(config.colors);
        assert!(config.progress_interval().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_time_format() {
        let mut config = LoggerConfig::default();
        assert_eq!(config.effective_time_format(true), "%H:%M:%S");
        assert_eq!(config.effective_time_format(false), "%Y-%m-%d %H:%M:%S");

        config.time_format = Some(String::new());
        assert_eq!(config.effective_time_format(true), "");
    }

    #[test]
    fn test_zero_interval_disables_rate_limit() {
        let config = LoggerConfig {
            progress_interval_ms: Some(0),
            ..Default::default()
        };
        assert!(config.progress_interval().is_none());

        let config = LoggerConfig {
            progress_interval_ms: Some(250),
            ..Default::default()
        };
        assert_eq!(config.progress_interval(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_validate_rejects_bad_time_format() {
        let config = LoggerConfig {
            time_format: Some("%H:%M:%".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_multiline_marker() {
        let config = LoggerConfig {
            trim_marker: "..\n".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "min_level: warn\nstyles:\n  info:\n    fg: '#cccccc'\n";
        let config: LoggerConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.min_level, LogLevel::Warning);
        assert_eq!(config.trim_marker, "...");
        assert!(config.colors);
        assert_eq!(
            config.styles.get(&LogLevel::Info),
            Some(&Style::new().fg(Color::new(0xcc, 0xcc, 0xcc)))
        );
    }
}
