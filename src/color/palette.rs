//! A small static palette of named colors.
//!
//! The table is ordered; lookups by color walk it in declaration order, so
//! when two names share a value (`default` and `white`) the earlier entry is
//! the primary name.

use crate::color::model::Color;

/// Named palette entries, in declaration order.
pub const NAMED_COLORS: &[(&str, Color)] = &[
    ("default", Color::rgb(1.0, 1.0, 1.0)),
    ("white", Color::rgb(1.0, 1.0, 1.0)),
    (
        "alabaster",
        Color::rgb(0.9764705882, 0.9764705882, 0.9764705882),
    ),
    ("dusty gray", Color::rgb(0.6, 0.6, 0.6)),
    ("mine shaft", Color::rgb(0.2, 0.2, 0.2)),
    ("dove gray", Color::rgb(0.4, 0.4, 0.4)),
    (
        "athens gray",
        Color::rgb(0.9372286201, 0.9372760653, 0.9586432576),
    ),
    ("azure radiance", Color::rgb(0.0, 0.4784313725, 1.0)),
    ("blue ribbon", Color::rgb(0.0, 0.4274509804, 1.0)),
    ("black", Color::rgb(0.0, 0.0, 0.0)),
    ("scarlet", Color::rgb(1.0, 0.1490196078, 0.0)),
];

/// Look up a palette color by name, case-insensitively.
pub fn named(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

/// The first palette name whose color equals `color` exactly.
pub fn name_of(color: Color) -> Option<&'static str> {
    matches(color).next()
}

/// All palette names whose color equals `color` exactly, in table order.
pub fn matches(color: Color) -> impl Iterator<Item = &'static str> {
    NAMED_COLORS
        .iter()
        .filter(move |&&(_, c)| c == color)
        .map(|&(n, _)| n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_lookup_is_case_insensitive() {
        assert_eq!(named("dove gray"), Some(Color::rgb(0.4, 0.4, 0.4)));
        assert_eq!(named("Dove Gray"), named("dove gray"));
        assert_eq!(named("no such color"), None);
    }

    #[test]
    fn name_of_finds_exact_channel_match() {
        assert_eq!(name_of(Color::rgb(0.4, 0.4, 0.4)), Some("dove gray"));
        assert_eq!(name_of(Color::rgb(1.0, 0.1490196078, 0.0)), Some("scarlet"));
        // near misses don't match
        assert_eq!(name_of(Color::rgb(0.4, 0.4, 0.40001)), None);
    }

    #[test]
    fn duplicate_values_resolve_in_table_order() {
        let white = Color::rgb(1.0, 1.0, 1.0);
        assert_eq!(name_of(white), Some("default"));
        assert_eq!(matches(white).collect::<Vec<_>>(), vec!["default", "white"]);
    }

    #[test]
    fn palette_colors_are_opaque() {
        for &(name, color) in NAMED_COLORS {
            assert_eq!(color.a, 1.0, "{name} should be opaque");
        }
    }
}
