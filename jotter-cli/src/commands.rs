use jotter::color::state::ColorStateStore;
use jotter::config::app_config::AppConfig;
use jotter::data::Note;
use jotter::notepad::Notepad;
use jotter::rng::SyncRng;
use jotter::storage::{NoteStore, NoteStoreError, ProductionNoteStore, StorageError};
use jotter::widget::{FileWidgetNotifier, NoopWidgetNotifier, WidgetNotifier};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::cli::{join_text, Command};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot open the note store: {0}")]
    Open(#[from] StorageError),

    #[error(transparent)]
    NoteStore(#[from] NoteStoreError),

    #[error("date formatting error: {0}")]
    DateFormat(#[from] time::error::Format),
}

pub type ProductionNotepad = Notepad<ProductionNoteStore, Box<dyn WidgetNotifier>>;

pub async fn open_notepad(app_config: &AppConfig) -> Result<ProductionNotepad, StorageError> {
    let store = ProductionNoteStore::new(app_config).await?;
    let widget: Box<dyn WidgetNotifier> = match app_config.widget_directory {
        Some(ref dir) => Box::new(FileWidgetNotifier::new(dir)),
        None => {
            debug!("no widget directory configured");
            Box::new(NoopWidgetNotifier)
        },
    };
    Ok(
        Notepad::new(
            store,
            widget,
            ColorStateStore::new(&app_config.data_directory),
            app_config.preferences.clone(),
            SyncRng::new(StdRng::from_os_rng()),
        ).await
    )
}

pub async fn execute(
    app_config: &AppConfig,
    command: Command,
) -> Result<(), CommandError> {
    let notepad = open_notepad(app_config).await?;
    match command {
        Command::Add { text } => {
            match notepad.send(&join_text(&text)).await? {
                Some(note) => println!("{}", note.id),
                None => info!("nothing to add"),
            }
        },
        Command::List => {
            for note in notepad.store().fetch_notes().await? {
                println!(
                    "{} {} {} {}",
                    note.id,
                    notepad.display_color(&note),
                    note.modified_at.format(
                        format_description!("[year]-[month]-[day] [hour]:[minute]")
                    )?,
                    note.title().unwrap_or_default(),
                );
            }
        },
        Command::Show { id } => {
            let note = notepad.store().get_note(id).await?;
            print_note(&notepad, &note)?;
        },
        Command::Edit { id, text } => {
            let note = notepad.store()
                .update_note_content(id, &join_text(&text))
                .await?;
            print_note(&notepad, &note)?;
        },
        Command::Recolor { id, color } => {
            let note = notepad.store()
                .update_note_color(id, color.into())
                .await?;
            print_note(&notepad, &note)?;
        },
        Command::ApplyPreferences => {
            let count = notepad.apply_color_preference().await?;
            println!("recolored {count} notes");
        },
        Command::Delete { id } => {
            notepad.store().delete_note(id).await?;
            println!("deleted {id}");
        },
        Command::NextColor => {
            let assignment = notepad.preview_color().await;
            if assignment.repeated {
                println!("{} (repeated)", assignment.display_color);
            } else {
                println!("{}", assignment.display_color);
            }
        },
    }
    Ok(())
}

fn print_note(notepad: &ProductionNotepad, note: &Note) -> Result<(), CommandError> {
    println!("id: {}", note.id);
    println!("color: {}", notepad.display_color(note));
    println!("created: {}", note.created_at.format(&Rfc3339)?);
    println!("modified: {}", note.modified_at.format(&Rfc3339)?);
    println!();
    println!("{}", note.content);
    Ok(())
}
