//! The emit routine: filter, build, fit, style, pad, terminate, write.

use super::Logger;
use crate::message::Message;
use chrono::{DateTime, FixedOffset};
use par_log_config::LogLevel;
use par_log_style::display_width;
use std::fmt::Write as _;
use std::io::{self, Write};

impl Logger {
    /// Render `text` at `level` and write it to the sink.
    ///
    /// Returns the number of bytes written, or `Ok(0)` when the message was
    /// filtered out: below the minimum level, a progress update on a
    /// non-interactive sink, or a progress update arriving faster than the
    /// configured interval. Only sink I/O errors are reported.
    pub fn emit(&self, level: LogLevel, text: &str) -> io::Result<usize> {
        let now = self.clock.now();

        let is_progress = level == LogLevel::Progress;
        if is_progress && !self.interactive {
            return Ok(0);
        }
        if !level.passes(self.min_level) {
            return Ok(0);
        }

        let mut state = self.state.lock();

        if is_progress {
            if let (Some(interval), Some(last)) = (self.progress_interval, state.last_progress_at)
                && now.instant.saturating_duration_since(last) < interval
            {
                return Ok(0);
            }
            state.last_progress_at = Some(now.instant);
        }

        let text = if self.strip_messages { text.trim() } else { text };
        let mut msg = Message::new(self.format_timestamp(&now.wall), text);

        let columns = if self.interactive {
            state.sink.columns()
        } else {
            None
        };

        if self.interactive {
            // Fit first so escape sequences never count against the width
            // and never get cut in half.
            if let Some(columns) = columns {
                msg.fit(columns, &self.trim_marker);
            }
            msg.timestamp = self.styles.render_timestamp(&msg.timestamp);
            msg.text = self.styles.render_level(level, &msg.text);
        } else {
            msg.prefix = format!("|{}|", level.symbol());
        }

        let mut line = msg.to_string();
        let width = display_width(&line);

        // Blank out whatever is left of a wider progress line underneath.
        if self.interactive && state.last_progress_width > 0 {
            if width < state.last_progress_width {
                let mut padding = state.last_progress_width - width;
                if let Some(columns) = columns {
                    padding = padding.min(columns.saturating_sub(width));
                }
                line.extend(std::iter::repeat_n(' ', padding));
            }
            state.last_progress_width = 0;
        }

        if is_progress {
            state.last_progress_width = width;
            line.push('\r');
        } else {
            line.push('\n');
        }

        state.sink.write_all(line.as_bytes())?;
        state.sink.flush()?;
        Ok(line.len())
    }

    /// Erase a pending progress line so the cursor sits on a clean row.
    ///
    /// Writes spaces over the recorded progress width (never past the
    /// terminal edge) followed by a carriage return. A no-op when no progress
    /// line is showing.
    pub fn clear_progress(&self) -> io::Result<usize> {
        if !self.interactive {
            return Ok(0);
        }

        let mut state = self.state.lock();
        if state.last_progress_width == 0 {
            return Ok(0);
        }

        let mut width = state.last_progress_width;
        if let Some(columns) = state.sink.columns() {
            width = width.min(columns);
        }
        state.last_progress_width = 0;

        let mut line = " ".repeat(width);
        line.push('\r');
        state.sink.write_all(line.as_bytes())?;
        state.sink.flush()?;
        Ok(line.len())
    }

    /// Timestamp text for `wall`, empty when timestamps are disabled.
    fn format_timestamp(&self, wall: &DateTime<FixedOffset>) -> String {
        if self.time_format.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        if write!(out, "{}", wall.format(&self.time_format)).is_err() {
            out.clear();
        }
        out
    }
}
