use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::config::preferences::Preferences;
use crate::lib_constants::{DEFAULT_DATA_DIR, DEFAULT_MAX_NOTE_LEN};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    #[serde(default = "app_config_default_data_dir")]
    pub data_directory: PathBuf,

    #[serde(default = "app_config_default_max_note_len")]
    pub max_note_len: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_directory: Option<PathBuf>,

    #[serde(default)]
    pub preferences: Preferences,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_directory: app_config_default_data_dir(),
            max_note_len: app_config_default_max_note_len(),
            widget_directory: None,
            preferences: Preferences::default(),
        }
    }
}

pub fn app_config_default_data_dir() -> PathBuf {
    DEFAULT_DATA_DIR.into()
}

pub fn app_config_default_max_note_len() -> u64 {
    DEFAULT_MAX_NOTE_LEN
}
