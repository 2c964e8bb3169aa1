//! Hex color parsing and formatting.
//!
//! Input accepts 6 digits (`RRGGBB`, alpha defaults to opaque) or 8 digits
//! (`RRGGBBAA`), case-insensitive, with optional `#` characters and
//! surrounding whitespace. Output is always uppercase with no `#` prefix.

use std::str::FromStr;

use thiserror::Error;

use crate::color::ColorFloat;
use crate::color::model::Color;

/// The input was not a 6- or 8-digit hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color {input:?}: expected 6 (RRGGBB) or 8 (RRGGBBAA) hex digits")]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input, as given.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse a hex color string into a [`Color`].
///
/// Surrounding whitespace is trimmed and every `#` is stripped before
/// decoding. Channels are exact: each byte divided by 255.0.
pub fn parse_hex(input: &str) -> Result<Color, ColorParseError> {
    let hex: String = input.trim().chars().filter(|&c| c != '#').collect();

    // `from_str_radix` also accepts a sign, so check the digits ourselves
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::new(input));
    }
    let Ok(bits) = u32::from_str_radix(&hex, 16) else {
        return Err(ColorParseError::new(input));
    };

    let channel = |shift: u32| ((bits >> shift) & 0xFF) as ColorFloat / 255.0;

    match hex.len() {
        6 => Ok(Color::new(channel(16), channel(8), channel(0), 1.0)),
        8 => Ok(Color::new(channel(24), channel(16), channel(8), channel(0))),
        _ => Err(ColorParseError::new(input)),
    }
}

/// Format a [`Color`] as an uppercase hex string with no `#` prefix.
///
/// Each byte is `round(channel * 255.0)` with ties away from zero. Channels
/// are assumed to be within `[0.0, 1.0]`; this never fails.
#[must_use]
pub fn format_hex(color: Color, include_alpha: bool) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if include_alpha {
        format!("{r:02X}{g:02X}{b:02X}{a:02X}")
    } else {
        format!("{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_hex(value)
    }
}
