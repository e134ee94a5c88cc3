//! Line-oriented command front end
//!
//! Each input line becomes one session event (or a local command):
//!
//! ```text
//! album OK Computer     set a field (no value clears it)
//! filter radio          set the filter (no value clears it)
//! submit                press submit
//! show                  print the current view
//! help                  list commands
//! quit                  leave
//! ```

use thiserror::Error;

use crate::session::Event;
use crate::validators::Field;

pub const HELP_TEXT: &str = "\
Commands:
  album|artist|year|genre <value>   set a form field (empty clears)
  filter <text>                     filter the list (empty shows all)
  submit                            add the record
  show                              print the current state
  help                              this text
  quit                              exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forward to the session
    Event(Event),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),

    #[error("'{0}' takes no argument")]
    UnexpectedArgument(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (trimmed, ""),
        };

        if let Some(field) = Field::from_name(word) {
            return Ok(Some(Command::Event(Event::FieldEdited(field, rest.to_string()))));
        }

        let bare = |command: Command| {
            if rest.trim().is_empty() {
                Ok(Some(command))
            } else {
                Err(CommandError::UnexpectedArgument(word.to_string()))
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "filter" => Ok(Some(Command::Event(Event::FilterEdited(rest.to_string())))),
            "submit" => bare(Command::Event(Event::SubmitPressed)),
            "show" | "list" => bare(Command::Show),
            "help" | "?" => bare(Command::Help),
            "quit" | "exit" => bare(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}
