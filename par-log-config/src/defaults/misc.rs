//! Default values for logger behaviour.

use crate::types::LogLevel;

/// Timestamp format used when the sink is an interactive terminal.
pub const TERMINAL_TIME_FORMAT: &str = "%H:%M:%S";

/// Timestamp format used for files and pipes, where lines outlive the session.
pub const FILE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn min_level() -> LogLevel {
    LogLevel::Info
}

pub fn trim_marker() -> String {
    "...".to_string()
}

pub fn colors() -> bool {
    true
}

/// Auto-selected timestamp format: short for terminals, dated for files.
pub fn time_format_for(interactive: bool) -> &'static str {
    if interactive {
        TERMINAL_TIME_FORMAT
    } else {
        FILE_TIME_FORMAT
    }
}
