//! Typed error variants for the par-log-config crate.
//!
//! Config problems are reported when a logger is built, never while it is
//! emitting messages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating logger configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error reading config '{}': {source}", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid YAML or unknown values.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("invalid config value: {0}")]
    Validation(String),

    /// An environment override named an unknown level.
    #[error(transparent)]
    Level(#[from] crate::types::ParseLevelError),
}
