//! Line-oriented front end.
//!
//! Commands are resolved against the screen currently shown, so `edit` and
//! `delete` only reach users that are listed and `submit` respects the
//! disabled button.

use crate::errors::CommandError;
use crate::models::DraftField;
use crate::view::{Intent, Screen};

pub const HELP: &str = "\
Commands:
  name <text>    set the name
  email <text>   set the email
  age [n]        set the age (empty clears it)
  submit         create or update
  edit <id>      edit a listed user
  delete <id>    delete a listed user
  cancel         leave edit mode
  help           show this help
  quit           exit";

/// What the terminal should do with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Help,
    Quit,
    Nothing,
}

/// Parse one line of input against the current screen.
pub fn parse_command(line: &str, screen: &Screen) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Nothing);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "name" => input(DraftField::Name, rest),
        "email" => input(DraftField::Email, rest),
        "age" => input(DraftField::Age, rest),
        "submit" | "create" | "update" => {
            if !screen.form.submit.enabled {
                return Err(CommandError::SubmitDisabled);
            }
            Command::Intent(screen.form.submit.intent.clone())
        }
        "cancel" => match &screen.form.cancel {
            Some(cancel) => Command::Intent(cancel.intent.clone()),
            None => return Err(CommandError::NotEditing),
        },
        "edit" => {
            let id = parse_id("edit", rest)?;
            let row = screen.row(id).ok_or(CommandError::NotListed(id))?;
            Command::Intent(row.edit.clone())
        }
        "delete" => {
            let id = parse_id("delete", rest)?;
            let row = screen.row(id).ok_or(CommandError::NotListed(id))?;
            Command::Intent(row.delete.clone())
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(command)
}

fn input(field: DraftField, value: &str) -> Command {
    Command::Intent(Intent::Input(field, value.to_string()))
}

fn parse_id(command: &'static str, value: &str) -> Result<i64, CommandError> {
    if value.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    value
        .parse()
        .map_err(|_| CommandError::InvalidId(value.to_string()))
}
