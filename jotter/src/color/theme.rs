use std::fmt;
use std::fmt::{Display, Formatter};
use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ColorTheme {
    #[default]
    Default,
    Sunset,
    Kypool,
    Celestial,
    AppleVibrant,
    ScarletAzure,
}

const DEFAULT_COLORS: &[Color] = &[
    Color::from_hex(0x6aa6f8),
    Color::from_hex(0xf27b9b),
    Color::from_hex(0x8bd3a5),
    Color::from_hex(0xf6c26b),
    Color::from_hex(0xb18cf2),
];

const SUNSET_COLORS: &[Color] = &[
    Color::from_hex(0xff7e5f),
    Color::from_hex(0xfeb47b),
    Color::from_hex(0xd6546f),
];

const KYPOOL_COLORS: &[Color] = &[
    Color::from_hex(0x2ec4b6),
    Color::from_hex(0x3a86ff),
    Color::from_hex(0x8338ec),
    Color::from_hex(0x48cae4),
];

const CELESTIAL_COLORS: &[Color] = &[
    Color::from_hex(0xc33764),
    Color::from_hex(0x1d2671),
    Color::from_hex(0x5f4b8b),
    Color::from_hex(0x8e7cc3),
];

const APPLE_VIBRANT_COLORS: &[Color] = &[
    Color::from_hex(0xff3b30),
    Color::from_hex(0xff9500),
    Color::from_hex(0xffcc00),
    Color::from_hex(0x34c759),
    Color::from_hex(0x007aff),
    Color::from_hex(0xaf52de),
];

const SCARLET_AZURE_COLORS: &[Color] = &[
    Color::from_hex(0xd7263d),
    Color::from_hex(0x1b98e0),
    Color::from_hex(0xa4161a),
    Color::from_hex(0x247ba0),
];

impl ColorTheme {
    pub const ALL: [ColorTheme; 6] = [
        ColorTheme::Default,
        ColorTheme::Sunset,
        ColorTheme::Kypool,
        ColorTheme::Celestial,
        ColorTheme::AppleVibrant,
        ColorTheme::ScarletAzure,
    ];

    /// Unknown names resolve to [`ColorTheme::Default`].
    pub fn from_name(name: &str) -> ColorTheme {
        Self::ALL.into_iter()
            .find(|theme| theme.name() == name)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Default => "default",
            ColorTheme::Sunset => "sunset",
            ColorTheme::Kypool => "kypool",
            ColorTheme::Celestial => "celestial",
            ColorTheme::AppleVibrant => "appleVibrant",
            ColorTheme::ScarletAzure => "scarletAzure",
        }
    }

    pub fn colors(self) -> &'static [Color] {
        match self {
            ColorTheme::Default => DEFAULT_COLORS,
            ColorTheme::Sunset => SUNSET_COLORS,
            ColorTheme::Kypool => KYPOOL_COLORS,
            ColorTheme::Celestial => CELESTIAL_COLORS,
            ColorTheme::AppleVibrant => APPLE_VIBRANT_COLORS,
            ColorTheme::ScarletAzure => SCARLET_AZURE_COLORS,
        }
    }
}

impl Display for ColorTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;

    #[test]
    fn names_round_trip() {
        for theme in ColorTheme::ALL {
            assert_eq!(ColorTheme::from_name(theme.name()), theme);
        }
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(ColorTheme::from_name("neon"), ColorTheme::Default);
        assert_eq!(ColorTheme::from_name(""), ColorTheme::Default);
        assert_eq!(ColorTheme::from_name("Sunset"), ColorTheme::Default);
    }

    #[test]
    fn every_theme_has_two_distinct_colors() {
        for theme in ColorTheme::ALL {
            let distinct: HashSet<_> = theme.colors().iter().collect();
            assert!(distinct.len() >= 2, "{theme} has {} colors", distinct.len());
        }
    }

    #[test]
    fn sunset_has_three_colors() {
        assert_eq!(ColorTheme::Sunset.colors().len(), 3);
    }
}
