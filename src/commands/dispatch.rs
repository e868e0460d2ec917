//! Command dispatch against the address book.
//!
//! Every handler returns the message to print; the caller owns all I/O.
//! Failures come back as typed errors and the loop keeps running.

use super::Command;
use crate::book::{upcoming_birthdays, AddressBook};
use crate::error::{BookError, CommandResult};
use crate::models::Contact;
use chrono::NaiveDate;
use tracing::info;

/// Execute a parsed command against the book and produce the reply text.
///
/// `today` feeds the `birthdays` report so the dispatcher stays
/// deterministic; the binary passes the local wall-clock date.
///
/// # Errors
///
/// Returns `CommandError::Book` for validation failures and missing
/// contacts or phones. The book is never left partially mutated.
pub fn execute(book: &mut AddressBook, command: Command, today: NaiveDate) -> CommandResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Exit => Ok("Goodbye!".to_string()),
        Command::Add { name, phone } => add_contact(book, &name, &phone),
        Command::Change { name, phone } => change_contact(book, &name, &phone),
        Command::Phone { name } => show_phone(book, &name),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday { name, date } => add_birthday(book, &name, &date),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays => Ok(show_birthdays(book, today)),
    }
}

/// `add`: store a fresh contact under the name with the given phone.
///
/// Re-adding an existing name replaces the stored contact entirely, the
/// mapping-overwrite semantics of the book.
fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    let mut contact = Contact::new(name)?;
    contact.add_phone(phone)?;
    book.add_record(contact);
    info!(contact = name, "contact added");
    Ok("Contact added.".to_string())
}

/// `change`: replace the contact's first phone with the new number.
///
/// A contact without any phone yet simply gains the number.
fn change_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    let contact = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    match contact.first_phone().map(|p| p.as_str().to_string()) {
        Some(old) => contact.edit_phone(&old, phone)?,
        None => contact.add_phone(phone)?,
    }
    info!(contact = name, "contact updated");
    Ok("Contact updated.".to_string())
}

/// `phone`: the contact's first phone number.
fn show_phone(book: &AddressBook, name: &str) -> CommandResult<String> {
    let contact = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(match contact.first_phone() {
        Some(phone) => format!("Phone: {}", phone),
        None => "No phone number set for this contact.".to_string(),
    })
}

/// `all`: every contact card, one per line, in insertion order.
fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "Your address book is empty.".to_string();
    }
    book.contacts()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday`: record or overwrite the contact's birthday.
fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> CommandResult<String> {
    let contact = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    contact.add_birthday(date)?;
    info!(contact = name, birthday = date, "birthday recorded");
    Ok("Birthday added.".to_string())
}

/// `show-birthday`: the contact's recorded birthday, verbatim.
fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    let contact = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(match contact.birthday() {
        Some(birthday) => birthday.as_str().to_string(),
        None => "No birthday set for this contact.".to_string(),
    })
}

/// `birthdays`: the next-week report, one line per non-empty weekday bucket.
fn show_birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let report = upcoming_birthdays(book, today);
    if report.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    report
        .iter()
        .map(|bucket| format!("{}: {}", bucket.weekday, bucket.names.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}
