//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `LoggerConfig`
//! fields and by the logger when a field is left unset.

mod misc;
mod styles;

// ── Behaviour ──────────────────────────────────────────────────────────────
pub use misc::{
    FILE_TIME_FORMAT, TERMINAL_TIME_FORMAT, colors, min_level, time_format_for, trim_marker,
};

// ── Styles ─────────────────────────────────────────────────────────────────
pub use styles::{level_style, timestamp_style};
