use log::{debug, info, warn};
use rand::rngs::StdRng;
use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::color::assignment::{preferred_note_color, resolve_note_color};
use crate::color::state::ColorStateStore;
use crate::color::{assign_color, Assignment, Color, ColorContext};
use crate::config::preferences::Preferences;
use crate::data::{Note, NoteColor};
use crate::rng::SyncRng;
use crate::storage::{NoteStore, NoteStoreError};
use crate::widget::{WidgetNotifier, WidgetUpdate};


/// The write-a-note workflow on top of a [`NoteStore`]: picks the note's
/// color, stores it, refreshes the widget and remembers the color.
pub struct Notepad<S: NoteStore, W: WidgetNotifier> {
    store: S,
    widget: W,
    color_state: ColorStateStore,
    preferences: Preferences,
    context: Mutex<ColorContext>,
    rng: SyncRng<StdRng>,
}

impl<S: NoteStore, W: WidgetNotifier> Notepad<S, W> {
    pub async fn new(
        store: S,
        widget: W,
        color_state: ColorStateStore,
        preferences: Preferences,
        rng: SyncRng<StdRng>,
    ) -> Self {
        let previous_color = color_state.load()
            .await
            .unwrap_or_else(|e| {
                warn!("could not read the previous note color, ignoring: {e}");
                None
            });
        debug!("previous note color: {previous_color:?}");
        let context = ColorContext::from_preferences(&preferences, previous_color);
        Notepad {
            store,
            widget,
            color_state,
            preferences,
            context: Mutex::new(context),
            rng,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Stores `content` as a new note. Empty content is ignored and gives `None`.
    pub async fn send(
        &self,
        content: &str,
    ) -> Result<Option<Note>, NoteStoreError> {
        if content.is_empty() {
            debug!("ignoring an empty note");
            return Ok(None)
        }
        let mut context = self.context.lock().await;
        let (color, assigned_color, next_context) = if self.preferences.use_random_color {
            let mut next_context = context.clone();
            let Assignment { color, .. } = assign_color(
                &mut next_context,
                &mut *self.rng.get_rng(),
            );
            (NoteColor::Derived, color, Some(next_context))
        } else {
            (preferred_note_color(&self.preferences), self.preferences.static_note_color, None)
        };
        let note = self.store
            .create_note(
                content,
                OffsetDateTime::now_utc(),
                color,
                assigned_color,
            )
            .await?;
        info!("stored note {}", note.id);

        if let Some(next_context) = next_context {
            *context = next_context;
            if let Err(e) = self.color_state.save(assigned_color).await {
                warn!("could not persist the previous note color: {e}");
            }
        }
        drop(context);

        let update = WidgetUpdate {
            content: note.content.clone(),
            color: self.display_color(&note),
            date: note.created_at,
        };
        if let Err(e) = self.widget.notify(&update).await {
            warn!("widget update failed: {e}");
        }
        Ok(Some(note))
    }

    /// The assignment the next [`Notepad::send`] would draw from, without
    /// committing it.
    pub async fn preview_color(&self) -> Assignment {
        let mut context = self.context.lock().await.clone();
        assign_color(&mut context, &mut *self.rng.get_rng())
    }

    /// Points every stored note at the color the current preferences ask for.
    pub async fn apply_color_preference(&self) -> Result<usize, NoteStoreError> {
        self.store
            .set_color_for_all_notes(preferred_note_color(&self.preferences))
            .await
    }

    pub fn display_color(&self, note: &Note) -> Color {
        self.preferences
            .display_mode()
            .background(resolve_note_color(note, &self.preferences))
    }
}
