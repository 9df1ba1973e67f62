use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::color::Color;
use crate::data::{Note, NoteColor};

/// On-disk form of the whole store, in insertion order.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NotesData {
    #[serde(default, rename = "note")]
    pub notes: Vec<NoteData>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NoteData {
    pub id: Uuid,

    pub content: String,

    pub assigned_color: Color,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    #[serde(with = "time::serde::rfc3339")]
    pub modified_at: OffsetDateTime,

    // tables go after plain values
    pub color: NoteColor,
}

impl From<&Note> for NoteData {
    fn from(note: &Note) -> Self {
        NoteData {
            id: note.id,
            content: note.content.clone(),
            assigned_color: note.assigned_color,
            created_at: note.created_at,
            modified_at: note.modified_at,
            color: note.color.clone(),
        }
    }
}

impl From<NoteData> for Note {
    fn from(data: NoteData) -> Self {
        Note {
            id: data.id,
            content: data.content,
            color: data.color,
            assigned_color: data.assigned_color,
            created_at: data.created_at,
            modified_at: data.modified_at.max(data.created_at),
        }
    }
}
