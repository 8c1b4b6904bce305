//! Styling layer for par-log.
//!
//! This crate turns plain text into ANSI-styled text and measures how many
//! terminal cells a (possibly styled) string occupies:
//!
//! - [`Color`]: 24-bit RGB color parsed from `#rrggbb` / `#rgb` / `rgb(r, g, b)`
//! - [`Style`]: foreground/background colors plus text attributes
//! - [`display_width`]: visible width with escape sequences counted as zero cells
//! - [`strip_ansi_escapes`]: remove CSI/OSC/ESC sequences from text

pub mod color;
pub mod error;
pub mod style;
pub mod width;

pub use color::Color;
pub use error::ColorParseError;
pub use style::Style;
pub use width::{display_width, strip_ansi_escapes};
