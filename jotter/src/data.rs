use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::color::Color;
use crate::util::StrExt;

/// How a note picks its color.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum NoteColor {
    /// A color key: either [`crate::lib_constants::STATIC_NOTE_COLOR_KEY`]
    /// or a literal `#rrggbb`.
    Fixed(String),

    /// The random color assigned when the note was created.
    Derived,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub color: NoteColor,
    pub assigned_color: Color,
    pub created_at: OffsetDateTime,
    pub modified_at: OffsetDateTime,
}

impl Note {
    /// First non-blank line of the content.
    pub fn title(&self) -> Option<String> {
        self.content
            .lines()
            .find_map(|line| line.nonblank_to_some())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;
    use super::*;

    fn note(content: &str) -> Note {
        Note {
            id: Uuid::nil(),
            content: content.into(),
            color: NoteColor::Derived,
            assigned_color: Color::WHITE,
            created_at: datetime!(2026-01-01 0:00 UTC),
            modified_at: datetime!(2026-01-01 0:00 UTC),
        }
    }

    #[test]
    fn title_skips_blank_lines() {
        assert_eq!(note("\n  \n Buy milk \nand eggs").title(), Some("Buy milk".into()));
        assert_eq!(note(" \n\t").title(), None);
    }
}
