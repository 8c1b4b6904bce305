//! Configuration system for the par-log terminal logger.
//!
//! This crate provides:
//!
//! - [`LogLevel`]: ranked severity levels and their file-output symbols
//! - [`LoggerConfig`]: construction-time settings, loadable from YAML
//! - Environment overrides (`PAR_LOG_LEVEL`, `NO_COLOR`, ...)
//! - Default values and built-in styles

pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use config::LoggerConfig;
pub use error::ConfigError;
pub use types::{LogLevel, ParseLevelError};

// Styles appear in config values, so re-export the style types callers need
pub use par_log_style::{Color, Style};
