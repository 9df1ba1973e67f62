mod errors;
mod internal;

pub use errors::*;
pub use internal::{NoteStore, NoteStoreImpl, ProductionNoteStore};
pub use internal::io_trait::{NoteStoreIo, ProductionNoteStoreIo};
pub use internal::data::{NoteData, NotesData};
