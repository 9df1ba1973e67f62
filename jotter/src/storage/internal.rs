use std::collections::HashSet;
use async_trait::async_trait;
use log::{debug, info, trace};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::color::Color;
use crate::config::app_config::AppConfig;
use crate::data::{Note, NoteColor};
use crate::storage::internal::data::{NoteData, NotesData};
use crate::storage::internal::io_trait::{NoteStoreIo, ProductionNoteStoreIo};
use crate::storage::{NoteStoreError, StorageError, ValidationError};

pub mod data;
pub mod io_trait;

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Fails on empty or oversized `content`; callers are expected to
    /// filter empty input out beforehand.
    async fn create_note(
        &self,
        content: &str,
        created_at: OffsetDateTime,
        color: NoteColor,
        assigned_color: Color,
    ) -> Result<Note, NoteStoreError>;

    /// All notes, most recently modified first, ties in insertion order.
    async fn fetch_notes(&self) -> Result<Vec<Note>, NoteStoreError>;

    async fn get_note(&self, id: Uuid) -> Result<Note, NoteStoreError>;

    async fn update_note_color(
        &self,
        id: Uuid,
        color: NoteColor,
    ) -> Result<Note, NoteStoreError>;

    async fn update_note_content(
        &self,
        id: Uuid,
        content: &str,
    ) -> Result<Note, NoteStoreError>;

    /// Recolors every note without touching modification times.
    /// Returns the number of notes.
    async fn set_color_for_all_notes(
        &self,
        color: NoteColor,
    ) -> Result<usize, NoteStoreError>;

    async fn delete_note(&self, id: Uuid) -> Result<(), NoteStoreError>;
}

pub struct NoteStoreImpl<Io: NoteStoreIo> {
    state: RwLock<State>,
    io: Io,
    max_note_len: u64,
}

#[derive(Debug)]
struct State {
    // insertion order
    notes: Vec<Note>,
}

impl TryFrom<NotesData> for State {
    type Error = StorageError;

    fn try_from(value: NotesData) -> Result<Self, Self::Error> {
        let mut ids = HashSet::with_capacity(value.notes.len());
        if let Some(duplicate) = value.notes.iter().find(|n| !ids.insert(n.id)) {
            return Err(
                StorageError::Parsing {
                    message: format!("duplicate note id {}", duplicate.id),
                }
            )
        }
        Ok(
            State {
                notes: value.notes
                    .into_iter()
                    .map(Note::from)
                    .collect(),
            }
        )
    }
}

pub type ProductionNoteStore = NoteStoreImpl<ProductionNoteStoreIo>;

impl ProductionNoteStore {
    pub async fn new(
        app_config: &AppConfig,
    ) -> Result<ProductionNoteStore, StorageError> {
        Self::new_impl(
            ProductionNoteStoreIo::new(&app_config.data_directory).await?,
            app_config.max_note_len,
        ).await
    }
}

impl<Io: NoteStoreIo> NoteStoreImpl<Io> {
    pub async fn new_impl(
        io: Io,
        max_note_len: u64,
    ) -> Result<Self, StorageError> {
        let state: State = io.read_notes_file()
            .await?
            .try_into()?;
        debug!("note store opened with {} notes", state.notes.len());
        Ok(
            NoteStoreImpl {
                state: RwLock::new(state),
                io,
                max_note_len,
            }
        )
    }

    fn validate_content(&self, content: &str) -> Result<(), ValidationError> {
        if content.is_empty() {
            return Err(ValidationError::EmptyContent)
        }
        if content.len() as u64 > self.max_note_len {
            return Err(
                ValidationError::TooLong {
                    len: content.len(),
                    max: self.max_note_len,
                }
            )
        }
        Ok(())
    }

    /// Applies `change` to a copy of the notes, persists the copy, and only
    /// then makes it visible. The write lock is held throughout.
    async fn mutate<T: Send>(
        &self,
        change: impl FnOnce(&mut Vec<Note>, OffsetDateTime) -> Result<T, NoteStoreError> + Send,
    ) -> Result<T, NoteStoreError> {
        let mut state = self.state.write().await;
        let mut notes = state.notes.clone();
        let ret = change(&mut notes, self.io.get_time())?;
        self.io
            .write_notes_file(
                &NotesData {
                    notes: notes.iter().map(NoteData::from).collect(),
                },
            )
            .await?;
        state.notes = notes;
        Ok(ret)
    }

    async fn update_note(
        &self,
        id: Uuid,
        update: impl FnOnce(&mut Note) + Send,
    ) -> Result<Note, NoteStoreError> {
        self.mutate(|notes, now| {
            let note = notes.iter_mut()
                .find(|n| n.id == id)
                .ok_or(NoteStoreError::NotFound(id))?;
            update(note);
            note.modified_at = note.modified_at.max(now);
            Ok(note.clone())
        }).await
    }
}

#[async_trait]
impl<Io: NoteStoreIo> NoteStore for NoteStoreImpl<Io> {
    async fn create_note(
        &self,
        content: &str,
        created_at: OffsetDateTime,
        color: NoteColor,
        assigned_color: Color,
    ) -> Result<Note, NoteStoreError> {
        self.validate_content(content)?;
        let note = Note {
            id: self.io.generate_uuid(),
            content: content.to_owned(),
            color,
            assigned_color,
            created_at,
            modified_at: created_at,
        };
        info!("creating note {} with color {:?}", note.id, note.color);
        trace!("contents of note {}: \"{content}\"", note.id);
        let new_note = note.clone();
        self.mutate(move |notes, _| {
            notes.push(new_note);
            Ok(())
        }).await?;
        Ok(note)
    }

    async fn fetch_notes(&self) -> Result<Vec<Note>, NoteStoreError> {
        debug!("fetching notes");
        let mut notes = self.state.read().await.notes.clone();
        notes.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        Ok(notes)
    }

    async fn get_note(&self, id: Uuid) -> Result<Note, NoteStoreError> {
        debug!("getting note {id}");
        self.state
            .read()
            .await
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(NoteStoreError::NotFound(id))
    }

    async fn update_note_color(
        &self,
        id: Uuid,
        color: NoteColor,
    ) -> Result<Note, NoteStoreError> {
        info!("setting color of note {id} to {color:?}");
        self.update_note(id, |note| note.color = color).await
    }

    async fn update_note_content(
        &self,
        id: Uuid,
        content: &str,
    ) -> Result<Note, NoteStoreError> {
        self.validate_content(content)?;
        info!("updating contents of note {id}");
        trace!("new contents of note {id}: \"{content}\"");
        let content = content.to_owned();
        self.update_note(id, |note| note.content = content).await
    }

    async fn set_color_for_all_notes(
        &self,
        color: NoteColor,
    ) -> Result<usize, NoteStoreError> {
        info!("setting color of all notes to {color:?}");
        self.mutate(|notes, _| {
            notes.iter_mut().for_each(|note| note.color = color.clone());
            Ok(notes.len())
        }).await
    }

    async fn delete_note(&self, id: Uuid) -> Result<(), NoteStoreError> {
        info!("deleting note {id}");
        self.mutate(|notes, _| {
            let index = notes.iter()
                .position(|n| n.id == id)
                .ok_or(NoteStoreError::NotFound(id))?;
            notes.remove(index);
            Ok(())
        }).await
    }
}
