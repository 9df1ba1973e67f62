use std::path::PathBuf;
use thiserror::Error;
use tokio::io::Error as IoError;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("data directory \"{}\" does not exist", .0.display())]
    DataDirNotInitialized(PathBuf),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("note store is in use by another process")]
    Locked,

    #[error("note store parsing error: {message}")]
    Parsing {
        message: String,
    },

    #[error("note store serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl From<toml::de::Error> for StorageError {
    fn from(e: toml::de::Error) -> Self {
        StorageError::Parsing {
            message: format!("{e}"),
        }
    }
}

impl From<toml::ser::Error> for StorageError {
    fn from(e: toml::ser::Error) -> Self {
        StorageError::Serialization {
            message: format!("{e}"),
        }
    }
}

#[derive(Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    #[error("note content is empty")]
    EmptyContent,

    #[error("note content is {len} bytes long, at most {max} allowed")]
    TooLong {
        len: usize,
        max: u64,
    },
}

#[derive(Debug, Error)]
pub enum NoteStoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("note {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
