//! Default styles for timestamps and log levels.

use crate::types::LogLevel;
use par_log_style::{Color, Style};

const GREY: Color = Color::new(128, 128, 128); // #808080
const YELLOW: Color = Color::new(255, 255, 128); // #ffff80
const RED: Color = Color::new(255, 0, 0); // #ff0000

pub fn timestamp_style() -> Style {
    Style::new().fg(GREY)
}

/// Built-in style for a level; `None` renders the text unstyled.
pub fn level_style(level: LogLevel) -> Option<Style> {
    match level {
        LogLevel::Progress | LogLevel::Trace | LogLevel::Debug => Some(Style::new().fg(GREY)),
        LogLevel::Info => None,
        LogLevel::Warning => Some(Style::new().fg(YELLOW)),
        LogLevel::Error | LogLevel::Fatal => Some(Style::new().fg(RED)),
    }
}
