//! Text styles rendered as ANSI SGR sequences.

use crate::color::Color;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::sync::Once;

/// Display style for a span of text.
///
/// A style with no colors and no attributes is "plain": [`Style::render`]
/// returns the text unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    pub bold: bool,
    /// Dim / faint intensity
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            faint: false,
            italic: false,
            underline: false,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// True when rendering would not change the text.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && !self.bold
            && !self.faint
            && !self.italic
            && !self.underline
    }

    /// Wrap `text` in the escape sequences for this style.
    ///
    /// Empty text and plain styles pass through untouched, so an empty
    /// timestamp never turns into a zero-width escape-only field.
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() || self.is_plain() {
            return text.to_string();
        }
        force_colors();
        self.apply(text.normal()).to_string()
    }

    fn apply(&self, mut span: ColoredString) -> ColoredString {
        if self.bold {
            span = span.bold();
        }
        if self.faint {
            span = span.dimmed();
        }
        if self.italic {
            span = span.italic();
        }
        if self.underline {
            span = span.underline();
        }
        if let Some(c) = self.fg {
            span = span.truecolor(c.r, c.g, c.b);
        }
        if let Some(c) = self.bg {
            span = span.on_truecolor(c.r, c.g, c.b);
        }
        span
    }
}

/// Styling is decided by the logger (sink detection and the `colors`
/// setting), so `colored`'s own terminal and env checks are overridden.
fn force_colors() {
    static FORCE: Once = Once::new();
    FORCE.call_once(|| colored::control::set_override(true));
}
