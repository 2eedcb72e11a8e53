//! Command handlers.
//!
//! Each handler works on the address book and returns a typed [`Outcome`] or
//! a [`CommandError`]. Nothing here writes to the console; the REPL renders
//! the result.

use super::parser::Command;
use crate::domain::Birthday;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

/// The successful result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Greeting,
    ContactAdded,
    ContactUpdated,
    PhoneChanged,
    Phones { name: String, phones: Vec<String> },
    Contacts(Vec<String>),
    BirthdayAdded(String),
    BirthdayInfo { name: String, birthday: Option<Birthday> },
    UpcomingBirthdays { names: Vec<String>, window_days: u32 },
    ContactDeleted(String),
    Goodbye,
}

impl Outcome {
    /// Whether the session should end after this outcome.
    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Goodbye)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Greeting => write!(f, "How can I help you?"),
            Outcome::ContactAdded => write!(f, "Contact added."),
            Outcome::ContactUpdated => write!(f, "Contact updated."),
            Outcome::PhoneChanged => write!(f, "Phone has been changed."),
            Outcome::Phones { name, phones } if phones.is_empty() => {
                write!(f, "{} has no phone numbers.", name)
            }
            Outcome::Phones { phones, .. } => write!(f, "{}", phones.join("; ")),
            Outcome::Contacts(lines) if lines.is_empty() => write!(f, "Address book is empty."),
            Outcome::Contacts(lines) => write!(f, "{}", lines.join("\n")),
            Outcome::BirthdayAdded(name) => write!(f, "Birthday for {} added.", name),
            Outcome::BirthdayInfo {
                name,
                birthday: Some(birthday),
            } => write!(f, "{}'s birthday: {}", name, birthday),
            Outcome::BirthdayInfo {
                name,
                birthday: None,
            } => write!(f, "{} does not have a birthday set.", name),
            Outcome::UpcomingBirthdays { names, window_days } if names.is_empty() => {
                write!(f, "No upcoming birthdays {}.", WindowPhrase(*window_days))
            }
            Outcome::UpcomingBirthdays { names, window_days } => write!(
                f,
                "Upcoming birthdays {}: {}",
                WindowPhrase(*window_days),
                names.join(", ")
            ),
            Outcome::ContactDeleted(_) => write!(f, "Contact deleted."),
            Outcome::Goodbye => write!(f, "Good bye!"),
        }
    }
}

/// "in the next week" for the default window, "in the next N days" otherwise.
struct WindowPhrase(u32);

impl fmt::Display for WindowPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            DEFAULT_BIRTHDAY_WINDOW_DAYS => write!(f, "in the next week"),
            1 => write!(f, "in the next day"),
            days => write!(f, "in the next {} days", days),
        }
    }
}

/// Render a handler result the way the REPL prints it.
pub fn render(result: &CommandResult<Outcome>) -> String {
    match result {
        Ok(outcome) => outcome.to_string(),
        Err(CommandError::NotFound(_)) => "Contact not found.".to_string(),
        Err(CommandError::UnknownCommand(_)) => "Invalid command.".to_string(),
        Err(e) => format!("Error: {}", e),
    }
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

fn find_record<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

/// Add `phone` to `name`, creating the contact if needed.
///
/// An invalid phone for a new contact leaves the book untouched.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<Outcome> {
    if let Some(existing) = book.find_mut(name) {
        existing.add_phone(phone)?;
        debug!(name, "Added phone to existing contact");
        return Ok(Outcome::ContactUpdated);
    }

    let mut record = Record::with_name(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    debug!(name, "Created contact");
    Ok(Outcome::ContactAdded)
}

pub fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old: &str,
    new: &str,
) -> CommandResult<Outcome> {
    find_record_mut(book, name)?.edit_phone(old, new)?;
    Ok(Outcome::PhoneChanged)
}

pub fn show_phone(book: &AddressBook, name: &str) -> CommandResult<Outcome> {
    let record = find_record(book, name)?;
    Ok(Outcome::Phones {
        name: name.to_string(),
        phones: record
            .phones()
            .iter()
            .map(|p| p.as_str().to_string())
            .collect(),
    })
}

pub fn show_all(book: &AddressBook) -> CommandResult<Outcome> {
    Ok(Outcome::Contacts(book.iter().map(Record::to_string).collect()))
}

pub fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> CommandResult<Outcome> {
    find_record_mut(book, name)?.add_birthday(birthday)?;
    Ok(Outcome::BirthdayAdded(name.to_string()))
}

pub fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<Outcome> {
    let record = find_record(book, name)?;
    Ok(Outcome::BirthdayInfo {
        name: name.to_string(),
        birthday: record.birthday().copied(),
    })
}

pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> CommandResult<Outcome> {
    Ok(Outcome::UpcomingBirthdays {
        names: book.upcoming_birthdays_within(today, window_days),
        window_days,
    })
}

pub fn delete_contact(book: &mut AddressBook, name: &str) -> CommandResult<Outcome> {
    book.delete(name)
        .map(|_| Outcome::ContactDeleted(name.to_string()))
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

/// Run one parsed command against the book.
pub fn execute(
    command: &Command,
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> CommandResult<Outcome> {
    match command {
        Command::Hello => Ok(Outcome::Greeting),
        Command::Add { name, phone } => add_contact(book, name, phone),
        Command::Change { name, old, new } => change_phone(book, name, old, new),
        Command::Phone { name } => show_phone(book, name),
        Command::All => show_all(book),
        Command::AddBirthday { name, birthday } => add_birthday(book, name, birthday),
        Command::ShowBirthday { name } => show_birthday(book, name),
        Command::Birthdays => upcoming_birthdays(book, today, window_days),
        Command::Delete { name } => delete_contact(book, name),
        Command::Exit => Ok(Outcome::Goodbye),
    }
}
