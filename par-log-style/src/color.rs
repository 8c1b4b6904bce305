//! RGB color type used by log styles.

use crate::error::ColorParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color in RGB format.
///
/// Serialized as a `#rrggbb` string so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form.
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(value.to_string());
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Self::new(r, g, b))
            }
            3 => {
                // #abc expands to #aabbcc
                let mut channels = [0u8; 3];
                for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                    let v = digit.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = v * 16 + v;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => Err(invalid()),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        if let Some(rgb) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            let invalid = || ColorParseError::InvalidRgb(s.to_string());
            let parts: Vec<&str> = rgb.split(',').map(|p| p.trim()).collect();
            if parts.len() != 3 {
                return Err(invalid());
            }
            let r = parts[0].parse::<u8>().map_err(|_| invalid())?;
            let g = parts[1].parse::<u8>().map_err(|_| invalid())?;
            let b = parts[2].parse::<u8>().map_err(|_| invalid())?;
            return Ok(Self::new(r, g, b));
        }

        Err(ColorParseError::UnsupportedFormat(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
