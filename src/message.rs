//! Log line model: timestamp, prefix and text joined into one line.

use par_log_style::display_width;
use std::fmt;

/// Fields of a single log line.
///
/// Lives only for the duration of one emit call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub timestamp: String,
    /// `|SYM|` level tag, set for non-interactive sinks only
    pub prefix: String,
    pub text: String,
}

impl Message {
    pub fn new(timestamp: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            prefix: String::new(),
            text: text.into(),
        }
    }

    /// Shorten the text so the joined line fits `width` cells.
    ///
    /// When the line overflows, the text keeps as many leading characters as
    /// the overflow allows and `trim_marker` is appended. If the overflow
    /// exceeds the text itself, only the marker remains, and the marker alone
    /// may still be wider than `width`.
    pub fn fit(&mut self, width: usize, trim_marker: &str) {
        let separators = usize::from(!self.timestamp.is_empty());
        let used = display_width(&self.timestamp)
            + display_width(&self.prefix)
            + display_width(&self.text)
            + separators;

        let space_left = width as isize - used as isize;
        if space_left >= 0 {
            return;
        }

        let text_chars = self.text.chars().count() as isize;
        let marker_chars = trim_marker.chars().count() as isize;
        let keep = (text_chars + space_left - marker_chars).max(0) as usize;

        let mut fitted: String = self.text.chars().take(keep).collect();
        fitted.push_str(trim_marker);
        self.text = fitted;
    }

    /// Visible width of the joined line.
    pub fn display_width(&self) -> usize {
        display_width(&self.to_string())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.timestamp.is_empty() {
            write!(f, "{} ", self.timestamp)?;
        }
        if !self.prefix.is_empty() {
            write!(f, "{} ", self.prefix)?;
        }
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(timestamp: &str, prefix: &str, text: &str) -> Message {
        Message {
            timestamp: timestamp.to_string(),
            prefix: prefix.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_join_omits_empty_fields() {
        assert_eq!(message("", "", "x").to_string(), "x");
        assert_eq!(message("t", "", "x").to_string(), "t x");
        assert_eq!(message("", "|INF|", "x").to_string(), "|INF| x");
        assert_eq!(message("t", "|INF|", "x").to_string(), "t |INF| x");
        assert_eq!(message("t", "", "").to_string(), "t ");
    }

    #[test]
    fn test_fit_is_noop_when_line_fits() {
        let mut msg = message("12:00:00", "", "hello");
        let before = msg.clone();
        msg.fit(14, "...");
        assert_eq!(msg, before);

        let mut msg = message("", "", "0123456789");
        msg.fit(10, "...");
        assert_eq!(msg.text, "0123456789");
    }

    #[test]
    fn test_fit_keeps_prefix_of_text() {
        // 16 chars, 6 over, marker is 3 chars: keep 7
        let mut msg = message("", "", "0123456789ABCDEF");
        msg.fit(10, "...");
        assert_eq!(msg.text, "0123456...");
        assert_eq!(msg.display_width(), 10);
    }

    #[test]
    fn test_fit_overflow_larger_than_text_leaves_marker() {
        // 8 + 1 + 3 = 12 cells, 7 over a 3 char text
        let mut msg = message("12:00:00", "", "abc");
        msg.fit(5, "...");
        assert_eq!(msg.text, "...");
    }

    #[test]
    fn test_fit_truncates_with_timestamp() {
        // 8 (timestamp) + 1 (separator) + 20 (text) = 29 cells, 9 too many
        let mut msg = message("12:00:00", "", "abcdefghijklmnopqrst");
        msg.fit(20, "...");
        assert_eq!(msg.text, "abcdefgh...");
        assert_eq!(msg.to_string(), "12:00:00 abcdefgh...");
    }

    #[test]
    fn test_fit_counts_code_points_for_truncation() {
        let mut msg = message("", "", "héllo wörld");
        msg.fit(8, "…");
        // 11 chars, 3 over, marker is 1 char: keep 7
        assert_eq!(msg.text, "héllo w…");
    }

    #[test]
    fn test_fit_marker_longer_than_budget_yields_marker_only() {
        let mut msg = message("12:00:00", "", "abc");
        msg.fit(5, "[trimmed]");
        assert_eq!(msg.text, "[trimmed]");
    }

    #[test]
    fn test_display_width_of_joined_line() {
        assert_eq!(message("t", "", "日本").display_width(), 6);
    }
}
