use log::{trace, warn};
use rand::Rng;

use crate::color::{Color, ColorTheme};
use crate::config::preferences::Preferences;
use crate::data::{Note, NoteColor};
use crate::lib_constants::{MAX_COLOR_DRAWS, STATIC_NOTE_COLOR_KEY};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
    VibrantDark,
    PureDark,
}

impl DisplayMode {
    pub fn from_flags(
        dark_mode_enabled: bool,
        vibrant_dark_mode_enabled: bool,
        pure_dark_mode_enabled: bool,
    ) -> Self {
        if vibrant_dark_mode_enabled {
            DisplayMode::VibrantDark
        } else if pure_dark_mode_enabled {
            DisplayMode::PureDark
        } else if dark_mode_enabled {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    /// The background shown for a note of `color`; never affects what is stored.
    pub fn background(self, color: Color) -> Color {
        match self {
            DisplayMode::Light | DisplayMode::Dark => color,
            DisplayMode::VibrantDark => Color::GRAY_BACKGROUND,
            DisplayMode::PureDark => Color::BLACK,
        }
    }
}

/// Everything color assignment reads, and the one thing it updates.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColorContext {
    pub theme: ColorTheme,
    pub previous_color: Option<Color>,
    pub display_mode: DisplayMode,
}

impl ColorContext {
    pub fn from_preferences(
        preferences: &Preferences,
        previous_color: Option<Color>,
    ) -> Self {
        ColorContext {
            theme: preferences.color_theme(),
            previous_color,
            display_mode: preferences.display_mode(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Assignment {
    /// The themed draw, stored with the note.
    pub color: Color,
    pub display_color: Color,
    /// Set when the theme could not provide a color different from the previous one.
    pub repeated: bool,
}

/// Picks a random color of the context's theme that differs from the
/// previous one and records it as the new previous color.
pub fn assign_color(
    context: &mut ColorContext,
    rng: &mut impl Rng,
) -> Assignment {
    let (color, repeated) = pick_color(
        context.theme.colors(),
        context.previous_color,
        rng,
    );
    if repeated {
        warn!(
            "theme {} cannot avoid repeating color {color}",
            context.theme,
        );
    }
    trace!(
        "assigned color {color} from theme {} after {:?}",
        context.theme,
        context.previous_color,
    );
    context.previous_color = Some(color);
    Assignment {
        color,
        display_color: context.display_mode.background(color),
        repeated,
    }
}

// colors must not be empty
pub(crate) fn pick_color(
    colors: &[Color],
    previous: Option<Color>,
    rng: &mut impl Rng,
) -> (Color, bool) {
    let mut color = colors[rng.random_range(0..colors.len())];
    let mut draws = 1;
    while Some(color) == previous && draws < MAX_COLOR_DRAWS {
        color = colors[rng.random_range(0..colors.len())];
        draws += 1;
    }
    if Some(color) != previous {
        return (color, false)
    }
    match colors.iter().find(|c| Some(**c) != previous) {
        Some(other) => (*other, false),
        None => (color, true),
    }
}

/// The color a note is shown with, before any display mode override.
pub fn resolve_note_color(note: &Note, preferences: &Preferences) -> Color {
    match note.color {
        NoteColor::Derived => note.assigned_color,
        NoteColor::Fixed(ref key) if key == STATIC_NOTE_COLOR_KEY =>
            preferences.static_note_color,
        NoteColor::Fixed(ref key) => key.parse()
            .unwrap_or_else(|_| {
                warn!(
                    "note {} has unknown color key \"{key}\", using its assigned color",
                    note.id,
                );
                note.assigned_color
            }),
    }
}

/// The stored color new and recolored notes get under `preferences`.
pub fn preferred_note_color(preferences: &Preferences) -> NoteColor {
    if preferences.use_random_color {
        NoteColor::Derived
    } else {
        NoteColor::Fixed(STATIC_NOTE_COLOR_KEY.to_owned())
    }
}
