use crate::color::Color;

pub const DEFAULT_CONFIG_FILE: &str = "jotter.toml";
pub const DEFAULT_DATA_DIR: &str = ".jotter";
pub const APP_CONFIG_ENV_PREFIX: &str = "JOTTER_";

pub const DEFAULT_MAX_NOTE_LEN: u64 = 128 * 1024;

pub const NOTES_FILE_NAME: &str = "notes.toml";
pub const NOTES_LOCK_FILE_NAME: &str = "notes.lock";
pub const COLOR_STATE_FILE_NAME: &str = "color_state.toml";
pub const WIDGET_FILE_NAME: &str = "widget.toml";
pub const TMP_FILENAME_INFIX: &str = ".tmp.";

#[cfg(unix)]
pub const DATA_FILE_MODE: u32 = 0o600;

/// Upper bound on random draws before the assignment gives up on chance.
pub const MAX_COLOR_DRAWS: usize = 32;

/// Fixed color key meaning "the user's static note color preference".
pub const STATIC_NOTE_COLOR_KEY: &str = "staticNoteColor";

pub const DEFAULT_COLOR_THEME: &str = "default";
pub const DEFAULT_STATIC_NOTE_COLOR: Color = Color::from_rgb(0x9e, 0xc7, 0xff);
