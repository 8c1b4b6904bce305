//! Visible width measurement for styled terminal text.

use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// Strip ANSI escape sequences from text.
///
/// Handles CSI sequences (`ESC [`), OSC sequences (`ESC ]`), character set
/// designations and single-character escapes. Text without an `ESC` byte is
/// returned borrowed.
pub fn strip_ansi_escapes(text: &str) -> Cow<'_, str> {
    if !text.contains('\x1b') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            result.push(c);
            continue;
        }

        match chars.peek() {
            Some('[') => {
                // CSI: parameters end at the first final byte
                chars.next();
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() || c == '@' || c == '`' {
                        break;
                    }
                }
            }
            Some(']') => {
                // OSC: terminated by BEL or ST (ESC \)
                chars.next();
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            Some('(' | ')' | '*' | '+') => {
                chars.next();
                chars.next();
            }
            Some(_) => {
                chars.next();
            }
            None => {}
        }
    }

    Cow::Owned(result)
}

/// Number of terminal cells `text` occupies once rendered.
///
/// Escape sequences count as zero cells and East Asian wide glyphs as two.
pub fn display_width(text: &str) -> usize {
    strip_ansi_escapes(text).width()
}
