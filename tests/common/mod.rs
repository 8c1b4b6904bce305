//! Shared integration test helpers for par-log.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{fixed_clock, bare_config, TestContext};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use chrono::{FixedOffset, TimeZone};
use par_log::{LoggerConfig, ManualClock};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Clock stopped at 2024-03-15 09:30:00 UTC.
pub fn fixed_clock() -> ManualClock {
    let start = FixedOffset::east_opt(0)
        .expect("zero offset is valid")
        .with_ymd_and_hms(2024, 3, 15, 9, 30, 0)
        .single()
        .expect("unambiguous time");
    ManualClock::new(start)
}

/// Config with timestamps and colors turned off, so output is exactly the
/// rendered message.
pub fn bare_config() -> LoggerConfig {
    LoggerConfig {
        time_format: Some(String::new()),
        colors: false,
        ..Default::default()
    }
}

/// Temporary directory holding a log file and optionally a config file.
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    /// Temporary directory, kept alive for the lifetime of the context.
    pub dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the log file (not created until something writes to it).
    pub fn log_path(&self) -> PathBuf {
        self.path().join("out.log")
    }

    /// Write `yaml` to `config.yaml` and return its path.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.path().join("config.yaml");
        fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    /// Contents of the log file, empty if it was never created.
    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
