use std::path::{Path, PathBuf};
use async_trait::async_trait;
use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;
use tokio::io;

use crate::color::Color;
use crate::lib_constants::WIDGET_FILE_NAME;
use crate::rng::make_uuid;
use crate::util::write_file_atomically;

/// What a home screen widget shows: the most recently written note.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WidgetUpdate {
    pub content: String,
    pub color: Color,
    pub date: OffsetDateTime,
}

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("widget serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("widget date formatting error: {0}")]
    DateFormat(#[from] time::error::Format),
}

/// Best-effort: failures are reported but never undo the note that
/// triggered the update.
#[async_trait]
pub trait WidgetNotifier: Send + Sync {
    async fn notify(&self, update: &WidgetUpdate) -> Result<(), WidgetError>;
}

#[async_trait]
impl<T: WidgetNotifier + ?Sized> WidgetNotifier for Box<T> {
    async fn notify(&self, update: &WidgetUpdate) -> Result<(), WidgetError> {
        (**self).notify(update).await
    }
}

pub struct NoopWidgetNotifier;

#[async_trait]
impl WidgetNotifier for NoopWidgetNotifier {
    async fn notify(&self, update: &WidgetUpdate) -> Result<(), WidgetError> {
        trace!("no widget to notify about {update:?}");
        Ok(())
    }
}

/// Publishes the widget contents as a TOML file for the widget process to pick up.
pub struct FileWidgetNotifier {
    widget_file: PathBuf,
}

#[derive(Serialize)]
struct WidgetData<'a> {
    content: &'a str,
    color: Color,
    date: String,
    date_string: String,
}

impl FileWidgetNotifier {
    pub fn new(widget_directory: impl AsRef<Path>) -> Self {
        FileWidgetNotifier {
            widget_file: widget_directory.as_ref().join(WIDGET_FILE_NAME),
        }
    }
}

#[async_trait]
impl WidgetNotifier for FileWidgetNotifier {
    async fn notify(&self, update: &WidgetUpdate) -> Result<(), WidgetError> {
        debug!("updating widget at \"{}\"", self.widget_file.display());
        let serialized = toml::to_string(
            &WidgetData {
                content: &update.content,
                color: update.color,
                date: update.date.format(&Rfc3339)?,
                date_string: update.date.format(
                    format_description!("[month repr:long] [day padding:none], [year]")
                )?,
            }
        )?;
        let tmp_id = make_uuid(&mut rand::rng());
        write_file_atomically(&self.widget_file, serialized, tmp_id).await?;
        Ok(())
    }
}
