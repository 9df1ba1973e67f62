use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod assignment;
pub mod state;
pub mod theme;

pub use assignment::{assign_color, Assignment, ColorContext, DisplayMode};
pub use theme::ColorTheme;

/// An sRGB color, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(0xff, 0xff, 0xff);
    pub const GRAY_BACKGROUND: Color = Color::from_rgb(0x28, 0x28, 0x28);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Color {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Eq, Error, PartialEq)]
#[error("invalid color \"{0}\", expected #rrggbb")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorParseError(s.to_owned()))?;
        u32::from_str_radix(digits, 16)
            .map(Color::from_hex)
            .map_err(|_| ColorParseError(s.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lowercase_hex() {
        assert_eq!(Color::from_rgb(0x9e, 0xc7, 0xff).to_string(), "#9ec7ff");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn parses_either_case() {
        assert_eq!("#9EC7ff".parse(), Ok(Color::from_hex(0x9ec7ff)));
    }

    #[test]
    fn rejects_malformed() {
        for s in ["9ec7ff", "#9ec7f", "#9ec7fff", "#9ec7fg", "", "#+ec7ff"] {
            assert_eq!(
                s.parse::<Color>(),
                Err(ColorParseError(s.to_owned())),
                "accepted \"{s}\"",
            );
        }
    }
}
