//! Small color utilities: an RGBA [`Color`] with normalized float channels,
//! a hex string codec, and a static named-color palette.
//!
//! ```
//! use colorkit::{Color, format_hex, parse_hex};
//!
//! let red = parse_hex("#FF0000").unwrap();
//! assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));
//! assert_eq!(format_hex(red, false), "FF0000");
//! ```

pub mod color;

pub use color::ColorFloat;
pub use color::hex::{ColorParseError, format_hex, parse_hex};
pub use color::model::Color;
pub use color::palette;
