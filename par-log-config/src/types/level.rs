//! Log level type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log message.
///
/// Ordering defines minimum-level filtering: a message is suppressed when its
/// level ranks below the configured minimum. `Progress` ranks lowest but is
/// never subject to that filter; progress lines are gated on the sink being
/// an interactive terminal instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Transient, overwritable status line
    Progress,
    /// Most verbose
    Trace,
    /// Debug messages
    Debug,
    /// Informational messages
    #[default]
    Info,
    /// Recoverable problems
    #[serde(alias = "warn")]
    Warning,
    /// Errors
    Error,
    /// Unrecoverable errors; the facade exits the process after logging
    Fatal,
}

impl LogLevel {
    /// Three-letter code used as the `|SYM|` prefix in file output.
    ///
    /// Levels that never reach file output have no code and render as `???`.
    pub fn symbol(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRC",
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Warning => "WRN",
            LogLevel::Error => "ERR",
            LogLevel::Fatal => "FTL",
            LogLevel::Progress => "???",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LogLevel::Progress => "Progress",
            LogLevel::Trace => "Trace",
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
        }
    }

    /// All levels in rank order
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Progress,
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Fatal,
        ]
    }

    /// Whether a message at `self` passes a `minimum` level filter.
    pub fn passes(self, minimum: LogLevel) -> bool {
        self == LogLevel::Progress || self >= minimum
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Progress | LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Fatal => log::LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Error => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A string did not name a log level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}' (expected progress, trace, debug, info, warning, error or fatal)")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "progress" => Ok(LogLevel::Progress),
            "trace" | "trc" => Ok(LogLevel::Trace),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "info" | "inf" => Ok(LogLevel::Info),
            "warning" | "warn" | "wrn" => Ok(LogLevel::Warning),
            "error" | "err" => Ok(LogLevel::Error),
            "fatal" | "ftl" => Ok(LogLevel::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
