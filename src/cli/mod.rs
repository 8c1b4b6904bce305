//! Command-line interface for par-log.
//!
//! Flags are layered over the loaded config: defaults, then the config file,
//! then environment overrides, then these flags. Running the logger itself
//! lives in the [`run`] submodule.

pub mod run;

use clap::Parser;
use par_log_config::{ConfigError, LogLevel, LoggerConfig};
use std::path::PathBuf;

/// Level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LevelArg {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl From<LevelArg> for LogLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Trace => LogLevel::Trace,
            LevelArg::Debug => LogLevel::Debug,
            LevelArg::Info => LogLevel::Info,
            LevelArg::Warn => LogLevel::Warning,
            LevelArg::Error => LogLevel::Error,
            LevelArg::Fatal => LogLevel::Fatal,
        }
    }
}

/// par-log - Leveled terminal logging with an overwritable progress line
///
/// Logs MESSAGE, or each line read from stdin when no message is given.
#[derive(Parser, Debug)]
#[command(name = "par-log")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Message to log (read lines from stdin if omitted)
    #[arg(value_name = "MESSAGE")]
    pub message: Vec<String>,

    /// Level to log at
    #[arg(short, long, value_enum, default_value = "info", value_name = "LEVEL")]
    pub level: LevelArg,

    /// Log as progress updates that overwrite each other on a terminal
    #[arg(short, long, conflicts_with = "level")]
    pub progress: bool,

    /// Drop messages below this level
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub min_level: Option<LevelArg>,

    /// strftime pattern for timestamps
    #[arg(long, value_name = "FORMAT")]
    pub time_format: Option<String>,

    /// Omit timestamps
    #[arg(long, conflicts_with = "time_format")]
    pub no_timestamp: bool,

    /// Trim leading and trailing whitespace from messages
    #[arg(long)]
    pub strip: bool,

    /// Suffix appended to lines cut to the terminal width
    #[arg(long, value_name = "MARKER")]
    pub trim_marker: Option<String>,

    /// Minimum milliseconds between progress updates
    #[arg(long, value_name = "MS")]
    pub progress_interval: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Append to this file instead of writing to stderr
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Level each message is logged at.
    pub fn message_level(&self) -> LogLevel {
        if self.progress {
            LogLevel::Progress
        } else {
            self.level.into()
        }
    }

    /// Load the config file (explicit or default) with env overrides, then
    /// apply flags.
    pub fn load_config(&self) -> Result<LoggerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = LoggerConfig::load_from(path)?;
                config.apply_env_overrides()?;
                config
            }
            None => LoggerConfig::load()?,
        };
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Overwrite `config` fields with any flags that were given.
    pub fn apply_to(&self, config: &mut LoggerConfig) {
        if let Some(level) = self.min_level {
            config.min_level = level.into();
        }
        if self.no_timestamp {
            config.time_format = Some(String::new());
        } else if let Some(format) = &self.time_format {
            config.time_format = Some(format.clone());
        }
        if self.strip {
            config.strip_messages = true;
        }
        if let Some(marker) = &self.trim_marker {
            config.trim_marker = marker.clone();
        }
        if let Some(ms) = self.progress_interval {
            config.progress_interval_ms = Some(ms);
        }
        if self.no_color {
            config.colors = false;
        }
    }
}
