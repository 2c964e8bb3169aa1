use std::fmt::{self};

use crate::color::ColorFloat;
use crate::color::hex::format_hex;

/// An RGBA color with normalized channels.
///
/// Each channel is a [`ColorFloat`] in `[0.0, 1.0]`; values outside that
/// range are a precondition violation and produce unspecified (but not
/// unsafe) results in the byte/hex conversions. Two colors are equal when
/// all four channels are exactly equal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: ColorFloat,
    pub g: ColorFloat,
    pub b: ColorFloat,
    pub a: ColorFloat,
}

impl Default for Color {
    fn default() -> Self {
        // opaque black
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

/// Round a normalized channel to a byte, ties away from zero.
#[inline]
pub(crate) fn channel_to_byte(c: ColorFloat) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Color {
    pub const fn new(r: ColorFloat, g: ColorFloat, b: ColorFloat, a: ColorFloat) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: ColorFloat, g: ColorFloat, b: ColorFloat) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: ColorFloat, g: ColorFloat, b: ColorFloat, a: ColorFloat) -> Self {
        Self { r, g, b, a }
    }

    /// Exact conversion from bytes: each channel is `byte / 255.0`.
    #[inline]
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0] as ColorFloat / 255.0,
            g: rgb[1] as ColorFloat / 255.0,
            b: rgb[2] as ColorFloat / 255.0,
            a: 1.0,
        }
    }

    /// Exact conversion from bytes: each channel is `byte / 255.0`.
    #[inline]
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0] as ColorFloat / 255.0,
            g: rgba[1] as ColorFloat / 255.0,
            b: rgba[2] as ColorFloat / 255.0,
            a: rgba[3] as ColorFloat / 255.0,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_rgb8(self) -> [u8; 3] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
        ]
    }

    #[must_use]
    #[inline]
    pub fn into_rgba8(self) -> [u8; 4] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
            channel_to_byte(self.a),
        ]
    }

    #[must_use]
    #[inline]
    pub fn with_alpha(self, a: ColorFloat) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    // Linear interpolation in channel space.
    #[must_use]
    #[inline]
    pub fn lerp(self, other: Color, t: ColorFloat) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: ColorFloat, b: ColorFloat| a + (b - a) * t;

        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// `RRGGBB`, uppercase, no `#`.
    #[must_use]
    #[inline]
    pub fn into_hex6(self) -> String {
        format_hex(self, false)
    }

    /// `RRGGBBAA`, uppercase, no `#`.
    #[must_use]
    #[inline]
    pub fn into_hex8(self) -> String {
        format_hex(self, true)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // alpha digits only when the color is not opaque
        f.write_str(&format_hex(*self, self.a != 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::default(), Color::rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn byte_conversions_are_exact() {
        for v in [0u8, 1, 0x66, 0x80, 0xFE, 0xFF] {
            let c = Color::from_rgba8([v, 0, 0xFF, v]);
            assert_eq!(c.r, v as ColorFloat / 255.0);
            assert_eq!(c.into_rgba8(), [v, 0, 0xFF, v]);
        }
    }

    #[test]
    fn from_rgb8_is_opaque() {
        let c = Color::from_rgb8([0x11, 0xAA, 0xFF]);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.into_rgb8(), [0x11, 0xAA, 0xFF]);
    }

    #[test]
    fn with_alpha_replaces_only_alpha() {
        let c = Color::rgb(0.25, 0.5, 0.75).with_alpha(0.5);
        assert_eq!(c, Color::new(0.25, 0.5, 0.75, 0.5));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let white = Color::rgb(1.0, 1.0, 1.0);
        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        assert_eq!(black.lerp(white, 0.5), Color::rgb(0.5, 0.5, 0.5));
        // t is clamped
        assert_eq!(black.lerp(white, 2.0), white);
    }

    #[test]
    fn display_is_canonical_hex() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_string(), "FF0000");
        assert_eq!(Color::new(1.0, 0.0, 0.0, 0.0).to_string(), "FF000000");
    }
}
