use std::fs::TryLockError;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use log::{debug, trace};
use time::OffsetDateTime;
use tokio::fs;
use tokio::io;
use uuid::Uuid;

use crate::lib_constants::{NOTES_FILE_NAME, NOTES_LOCK_FILE_NAME};
use crate::rng::make_uuid;
use crate::storage::internal::data::NotesData;
use crate::storage::StorageError;
use crate::util::write_file_atomically;

#[async_trait]
pub trait NoteStoreIo: Send + Sync + 'static {
    async fn read_notes_file(
        &self,
    ) -> Result<NotesData, StorageError>;

    /// Must not return before `notes_data` is durably stored.
    async fn write_notes_file(
        &self,
        notes_data: &NotesData,
    ) -> Result<(), StorageError>;

    fn get_time(&self) -> OffsetDateTime;

    fn generate_uuid(&self) -> Uuid;
}

pub struct ProductionNoteStoreIo {
    notes_file_path: PathBuf,
    _lock_file: std::fs::File, // holds the store lock while open
}

impl ProductionNoteStoreIo {
    pub async fn new(
        data_directory: impl AsRef<Path>,
    ) -> Result<Self, StorageError> {
        let data_directory = data_directory.as_ref();
        trace!("opening note store at \"{}\"", data_directory.display());
        match fs::metadata(data_directory).await {
            Ok(meta) if meta.is_dir() => {},
            Ok(_) =>
                return Err(StorageError::DataDirNotInitialized(data_directory.into())),
            Err(e) if e.kind() == io::ErrorKind::NotFound =>
                return Err(StorageError::DataDirNotInitialized(data_directory.into())),
            Err(e) => return Err(e.into()),
        }
        let lock_path = data_directory.join(NOTES_LOCK_FILE_NAME);
        let lock_file = {
            let lock_path = lock_path.clone();
            tokio::task::spawn_blocking(move || lock_store(&lock_path))
                .await
                .map_err(io::Error::other)??
        };
        debug!("locked the note store at \"{}\"", lock_path.display());
        Ok(
            ProductionNoteStoreIo {
                notes_file_path: data_directory.join(NOTES_FILE_NAME),
                _lock_file: lock_file,
            }
        )
    }
}

fn lock_store(lock_path: &Path) -> Result<std::fs::File, StorageError> {
    let lock_file = std::fs::File::options()
        .create(true)
        .read(true)
        .write(true)
        .truncate(false)
        .open(lock_path)?;
    match lock_file.try_lock() {
        Ok(()) => Ok(lock_file),
        Err(TryLockError::WouldBlock) => Err(StorageError::Locked),
        Err(TryLockError::Error(e)) => Err(e.into()),
    }
}

#[async_trait]
impl NoteStoreIo for ProductionNoteStoreIo {
    async fn read_notes_file(
        &self,
    ) -> Result<NotesData, StorageError> {
        trace!(
            "reading notes file at \"{}\"",
            self.notes_file_path.display(),
        );
        let contents = match fs::read_to_string(&self.notes_file_path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "no notes file at \"{}\", starting empty",
                    self.notes_file_path.display(),
                );
                return Ok(NotesData::default())
            },
            Err(e) => return Err(e.into()),
        };
        let notes = toml::from_str(&contents)?;
        trace!("parsed the notes file: {notes:?}");
        Ok(notes)
    }

    async fn write_notes_file(
        &self,
        notes_data: &NotesData,
    ) -> Result<(), StorageError> {
        let serialized = toml::to_string(notes_data)?;
        trace!("notes serialized as \"{serialized}\"");
        write_file_atomically(
            &self.notes_file_path,
            serialized,
            self.generate_uuid(),
        ).await?;
        debug!(
            "finished writing notes file at \"{}\"",
            self.notes_file_path.display(),
        );
        Ok(())
    }

    fn get_time(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn generate_uuid(&self) -> Uuid {
        make_uuid(&mut rand::rng())
    }
}
