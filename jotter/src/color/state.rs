use std::path::{Path, PathBuf};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use tokio::{fs, io};

use crate::color::Color;
use crate::lib_constants::COLOR_STATE_FILE_NAME;
use crate::rng::make_uuid;
use crate::storage::StorageError;
use crate::util::write_file_atomically;

#[derive(Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
struct ColorStateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    previous_color: Option<Color>,
}

/// Remembers the last assigned color across runs.
#[derive(Clone, Debug)]
pub struct ColorStateStore {
    path: PathBuf,
}

impl ColorStateStore {
    pub fn new(data_directory: impl AsRef<Path>) -> Self {
        ColorStateStore {
            path: data_directory.as_ref().join(COLOR_STATE_FILE_NAME),
        }
    }

    pub async fn load(&self) -> Result<Option<Color>, StorageError> {
        trace!("reading color state at \"{}\"", self.path.display());
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no color state at \"{}\"", self.path.display());
                return Ok(None)
            },
            Err(e) => return Err(e.into()),
        };
        let data: ColorStateData = toml::from_str(&contents)?;
        Ok(data.previous_color)
    }

    pub async fn save(&self, color: Color) -> Result<(), StorageError> {
        debug!("saving previous color {color}");
        let serialized = toml::to_string(
            &ColorStateData {
                previous_color: Some(color),
            }
        )?;
        let tmp_id = make_uuid(&mut rand::rng());
        write_file_atomically(&self.path, serialized, tmp_id).await?;
        Ok(())
    }
}
