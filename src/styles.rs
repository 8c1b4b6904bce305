//! Per-level style table.
//!
//! Built once when a logger is constructed and never mutated afterwards.

use par_log_config::{LogLevel, LoggerConfig, defaults};
use par_log_style::Style;
use std::collections::HashMap;

/// Styles applied to terminal output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    timestamp: Option<Style>,
    levels: HashMap<LogLevel, Style>,
}

impl StyleTable {
    /// Table with no styles at all; every field renders as plain text.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Built-in styles: grey timestamps, progress, trace and debug, yellow
    /// warnings, red errors, plain info.
    pub fn builtin() -> Self {
        let levels = LogLevel::all()
            .iter()
            .filter_map(|level| defaults::level_style(*level).map(|style| (*level, style)))
            .collect();
        Self {
            timestamp: Some(defaults::timestamp_style()),
            levels,
        }
    }

    /// Built-in styles with the config's overrides applied.
    ///
    /// Returns a plain table when colors are disabled.
    pub fn from_config(config: &LoggerConfig) -> Self {
        if !config.colors {
            return Self::plain();
        }

        let mut table = Self::builtin();
        if let Some(style) = config.timestamp_style {
            table.timestamp = Some(style);
        }
        for (level, style) in &config.styles {
            table.levels.insert(*level, *style);
        }
        table.drop_plain_entries();
        table
    }

    /// Plain styles are stored as absent entries.
    fn drop_plain_entries(&mut self) {
        self.levels.retain(|_, style| !style.is_plain());
        if self.timestamp.is_some_and(|style| style.is_plain()) {
            self.timestamp = None;
        }
    }

    pub fn level(&self, level: LogLevel) -> Option<&Style> {
        self.levels.get(&level)
    }

    pub fn timestamp(&self) -> Option<&Style> {
        self.timestamp.as_ref()
    }

    /// Render `text` in the style for `level`, or unchanged if it has none.
    pub fn render_level(&self, level: LogLevel, text: &str) -> String {
        match self.level(level) {
            Some(style) => style.render(text),
            None => text.to_string(),
        }
    }

    pub fn render_timestamp(&self, text: &str) -> String {
        match &self.timestamp {
            Some(style) => style.render(text),
            None => text.to_string(),
        }
    }
}
