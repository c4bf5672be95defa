//! RGB colors and their `#RRGGBB` representation

use std::fmt;
use std::str::FromStr;

use super::error::{Result, WallpaperError};

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(c: Color) -> Self {
        (c.r, c.g, c.b)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb(c.channels())
    }
}

impl FromStr for Color {
    type Err = WallpaperError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a `#RRGGBB` string (either case) into a [`Color`]
pub fn hex_to_rgb(hex: &str) -> Result<Color> {
    let invalid = || WallpaperError::InvalidColorFormat(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format a [`Color`] as upper-case `#RRGGBB`
pub fn rgb_to_hex(color: Color) -> String {
    color.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_palette_color() {
        assert_eq!(hex_to_rgb("#4FC3F7").unwrap(), Color::new(79, 195, 247));
        assert_eq!(hex_to_rgb("#4fc3f7").unwrap(), Color::new(79, 195, 247));
    }

    #[test]
    fn rejects_missing_hash() {
        assert!(matches!(
            hex_to_rgb("4FC3F7"),
            Err(WallpaperError::InvalidColorFormat(s)) if s == "4FC3F7"
        ));
    }

    #[test]
    fn rejects_bad_digits_and_lengths() {
        for bad in ["#", "#12345", "#1234567", "#GGGGGG", "#12 456", "", "#ÿÿÿ"] {
            assert!(
                matches!(hex_to_rgb(bad), Err(WallpaperError::InvalidColorFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_round_trip_ignores_case() {
        for hex in ["#000000", "#FFFFFF", "#4fc3f7", "#E64A19", "#7e57C2"] {
            let back = rgb_to_hex(hex_to_rgb(hex).unwrap());
            assert!(back.eq_ignore_ascii_case(hex), "{hex} -> {back}");
        }
    }

    #[test]
    fn every_channel_value_survives_round_trip() {
        for v in 0..=255u8 {
            let color = Color::new(v, 255 - v, v / 2);
            assert_eq!(hex_to_rgb(&rgb_to_hex(color)).unwrap(), color);
        }
    }

    #[test]
    fn from_str_and_tuple_conversions() {
        let color: Color = "#29B6F6".parse().unwrap();
        let tuple: (u8, u8, u8) = color.into();
        assert_eq!(tuple, (0x29, 0xB6, 0xF6));
        assert_eq!(Color::from(tuple), color);
    }
}
