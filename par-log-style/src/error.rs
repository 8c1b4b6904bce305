//! Typed errors for par-log-style.

use thiserror::Error;

/// A color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The value is neither `#hex` nor `rgb(...)`.
    #[error("unsupported color format '{0}': expected #rrggbb, #rgb or rgb(r, g, b)")]
    UnsupportedFormat(String),

    /// A `#hex` value has the wrong number of digits or a non-hex digit.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),

    /// An `rgb(...)` component is missing or out of the 0..=255 range.
    #[error("invalid rgb() color '{0}'")]
    InvalidRgb(String),
}
