use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use jotter::data::NoteColor;
use jotter::lib_constants::DEFAULT_CONFIG_FILE;
use uuid::Uuid;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Log to syslog instead of stderr
    #[arg(long, default_value_t = false)]
    pub syslog: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum Command {
    /// Write a new note; empty text is ignored
    Add {
        text: Vec<String>,
    },

    /// List notes, most recently modified first
    List,

    /// Print a note with its color and dates
    Show {
        id: Uuid,
    },

    /// Replace the text of a note
    Edit {
        id: Uuid,

        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Change the color of a note
    Recolor {
        id: Uuid,

        #[command(flatten)]
        color: ColorArg,
    },

    /// Recolor every note according to the configured preferences
    ApplyPreferences,

    /// Delete a note permanently
    Delete {
        id: Uuid,
    },

    /// Show the color the next note would get
    NextColor,
}

#[derive(Args, Clone, Debug, Eq, PartialEq)]
#[group(required = true, multiple = false)]
pub struct ColorArg {
    /// Use the color the note was created with
    #[arg(long)]
    pub derived: bool,

    /// A fixed color: "staticNoteColor" or "#rrggbb"
    #[arg(long, value_name = "KEY")]
    pub fixed: Option<String>,
}

impl From<ColorArg> for NoteColor {
    fn from(value: ColorArg) -> Self {
        match value.fixed {
            Some(key) => NoteColor::Fixed(key),
            None => NoteColor::Derived,
        }
    }
}

pub fn join_text(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use super::*;

    #[test]
    fn cli_is_consistent() {
        CliConfig::command().debug_assert();
    }

    #[test]
    fn every_command_is_described() {
        for command in CliConfig::command().get_subcommands() {
            assert!(
                command.get_about().is_some(),
                "{} has no description",
                command.get_name(),
            );
        }
    }

    #[test]
    fn recolor_requires_exactly_one_color() {
        let id = Uuid::nil().to_string();
        assert!(CliConfig::try_parse_from(["jotter", "recolor", &id]).is_err());
        assert!(
            CliConfig::try_parse_from(
                ["jotter", "recolor", &id, "--derived", "--fixed", "#000000"],
            ).is_err()
        );
        let config = CliConfig::try_parse_from(
            ["jotter", "recolor", &id, "--fixed", "#000000"],
        ).unwrap();
        let Command::Recolor { color, .. } = config.command else {
            panic!("wrong command: {:?}", config.command)
        };
        assert_eq!(NoteColor::from(color), NoteColor::Fixed("#000000".into()));
    }

    #[test]
    fn add_joins_words() {
        let config = CliConfig::try_parse_from(["jotter", "add", "Buy", "milk"]).unwrap();
        assert_eq!(config.config_file, PathBuf::from(DEFAULT_CONFIG_FILE));
        let Command::Add { text } = config.command else {
            panic!("wrong command: {:?}", config.command)
        };
        assert_eq!(join_text(&text), "Buy milk");
    }
}
