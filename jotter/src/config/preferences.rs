use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorTheme, DisplayMode};
use crate::lib_constants::{DEFAULT_COLOR_THEME, DEFAULT_STATIC_NOTE_COLOR};

/// Appearance settings; read-only for everything in this crate.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Preferences {
    /// Kept as a plain string: names this build does not know fall back
    /// to the default theme instead of failing the whole configuration.
    pub note_color_theme: String,
    pub use_random_color: bool,
    pub static_note_color: Color,
    pub dark_mode_enabled: bool,
    pub vibrant_dark_mode_enabled: bool,
    pub pure_dark_mode_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            note_color_theme: DEFAULT_COLOR_THEME.to_owned(),
            use_random_color: true,
            static_note_color: DEFAULT_STATIC_NOTE_COLOR,
            dark_mode_enabled: false,
            vibrant_dark_mode_enabled: false,
            pure_dark_mode_enabled: false,
        }
    }
}

impl Preferences {
    pub fn color_theme(&self) -> ColorTheme {
        ColorTheme::from_name(&self.note_color_theme)
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_flags(
            self.dark_mode_enabled,
            self.vibrant_dark_mode_enabled,
            self.pure_dark_mode_enabled,
        )
    }
}
