// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fallback colors for items without an explicit color.
//!
//! The resolver never embeds a palette: callers inject a [`ColorAssigner`]. Colors are
//! assigned by the item's original index, so re-sorting a series keeps every slice's color.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

/// Maps an item's original index to a color.
pub trait ColorAssigner {
    /// Returns the color for the item at `index` in the series input.
    fn color(&self, index: usize) -> Color;
}

impl<F> ColorAssigner for F
where
    F: Fn(usize) -> Color,
{
    fn color(&self, index: usize) -> Color {
        self(index)
    }
}

/// A cycling list of colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Vega's `tableau10` categorical scheme.
    pub const TABLEAU10: [Color; 10] = [
        Color::from_rgb8(0x4c, 0x78, 0xa8),
        Color::from_rgb8(0xf5, 0x85, 0x18),
        Color::from_rgb8(0xe4, 0x57, 0x56),
        Color::from_rgb8(0x72, 0xb7, 0xb2),
        Color::from_rgb8(0x54, 0xa2, 0x4b),
        Color::from_rgb8(0xee, 0xca, 0x3b),
        Color::from_rgb8(0xb2, 0x79, 0xa2),
        Color::from_rgb8(0xff, 0x9d, 0xa6),
        Color::from_rgb8(0x9d, 0x75, 0x5d),
        Color::from_rgb8(0xba, 0xb0, 0xac),
    ];

    /// Creates a palette cycling through `colors`.
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self {
            colors: colors.into(),
        }
    }

    /// The colors in cycle order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Self::TABLEAU10)
    }
}

impl ColorAssigner for Palette {
    fn color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return css::GRAY;
        }
        self.colors[index % self.colors.len()]
    }
}

/// Parses a CSS color string such as `"#ff8800"`, `"tomato"` or `"rgb(0 0 255)"`.
pub fn parse_css_color(s: &str) -> Result<Color, peniko::color::ParseError> {
    Ok(peniko::color::parse_color(s)?.to_alpha_color())
}

/// `Option<Color>` as CSS hex strings.
#[cfg(feature = "serde")]
pub(crate) mod serde_color {
    extern crate alloc;

    use alloc::format;
    use alloc::string::String;

    use peniko::Color;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(
        color: &Option<Color>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match color {
            Some(color) => {
                let rgba = color.to_rgba8();
                let hex = if rgba.a == 255 {
                    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
                } else {
                    format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
                };
                serializer.serialize_some(&hex)
            }
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Color>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse_css_color(&s).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn palette_cycles_by_index() {
        let palette = Palette::new([css::RED, css::BLUE]);
        assert_eq!(palette.color(0), css::RED);
        assert_eq!(palette.color(1), css::BLUE);
        assert_eq!(palette.color(2), css::RED);
    }

    #[test]
    fn empty_palette_falls_back_to_gray() {
        assert_eq!(Palette::new(Vec::new()).color(3), css::GRAY);
    }

    #[test]
    fn closures_are_color_assigners() {
        let assign = |i: usize| if i == 0 { css::GREEN } else { css::BLACK };
        assert_eq!(assign.color(0), css::GREEN);
        assert_eq!(assign.color(5), css::BLACK);
    }

    #[test]
    fn parses_css_hex_colors() {
        let color = parse_css_color("#ff0000").unwrap();
        assert_eq!(color.to_rgba8().r, 255);
        assert!(parse_css_color("not a color").is_err());
    }
}
