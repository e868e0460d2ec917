//! Command-line parsing for the interactive loop.

use crate::error::{CommandError, CommandResult};

/// A parsed user command.
///
/// The verb is matched case-insensitively; arguments keep their case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add { name: String, phone: String },
    /// `change <name> <new_phone>`
    Change { name: String, phone: String },
    /// `phone <name>`
    Phone { name: String },
    /// `all`
    All,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday { name: String, date: String },
    /// `show-birthday <name>`
    ShowBirthday { name: String },
    /// `birthdays`
    Birthdays,
    /// `close` or `exit`
    Exit,
}

/// Parse one input line into a [`Command`].
///
/// # Errors
///
/// Returns `CommandError::Unknown` for an unrecognized verb and
/// `CommandError::Usage` when the argument count does not fit the verb.
pub fn parse(line: &str) -> CommandResult<Command> {
    let mut parts = line.split_whitespace();
    let verb = parts
        .next()
        .ok_or(CommandError::Usage("<command> [arguments]"))?
        .to_lowercase();
    let args: Vec<&str> = parts.collect();

    match verb.as_str() {
        "hello" => Ok(Command::Hello),
        "add" => match args.as_slice() {
            [name, phone] => Ok(Command::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
            _ => Err(CommandError::Usage("add <name> <phone>")),
        },
        "change" => match args.as_slice() {
            [name, phone] => Ok(Command::Change {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
            _ => Err(CommandError::Usage("change <name> <new_phone>")),
        },
        "phone" => match args.as_slice() {
            [name] => Ok(Command::Phone {
                name: name.to_string(),
            }),
            _ => Err(CommandError::Usage("phone <name>")),
        },
        "all" => Ok(Command::All),
        "add-birthday" => match args.as_slice() {
            [name, date] => Ok(Command::AddBirthday {
                name: name.to_string(),
                date: date.to_string(),
            }),
            _ => Err(CommandError::Usage("add-birthday <name> <DD.MM.YYYY>")),
        },
        "show-birthday" => match args.as_slice() {
            [name] => Ok(Command::ShowBirthday {
                name: name.to_string(),
            }),
            _ => Err(CommandError::Usage("show-birthday <name>")),
        },
        "birthdays" => Ok(Command::Birthdays),
        "close" | "exit" => Ok(Command::Exit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
