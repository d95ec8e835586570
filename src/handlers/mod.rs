//! Command handlers for the assistant bot.
//!
//! Each handler is the thin boundary between the command loop and the core:
//! it takes the already-parsed argument list plus the shared
//! [`AddressBook`], performs one operation, and returns a display string.
//! All failures come back as [`CommandError`] and are rendered by the loop;
//! nothing here terminates the process.

use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

const MISSING_NAME_OR_PHONE: &str = "You haven't entered a contact name or phone!";

/// `add <name> <phone>` — create a contact, or update an existing one.
///
/// The phone is validated before a new record is inserted, so a rejected
/// phone never leaves a half-built contact behind. The returned message
/// distinguishes whether the name was new.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::MissingArgument(
            "Maybe you forgot enter name or phone?",
        ));
    }
    let (name, phone) = (&args[0], &args[1]);

    match book.find_mut(name) {
        Some(record) => {
            record.set_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(name.as_str())?;
            record.set_phone(phone)?;
            book.add(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <new-phone>` — replace an existing contact's phone.
pub fn change_phone(args: &[String], book: &mut AddressBook) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::MissingArgument(
            "You did not enter the subscriber's name!",
        ));
    }
    if args.len() < 2 {
        return Err(CommandError::MissingArgument(
            "You did not enter a new phone number!",
        ));
    }
    let (name, new_phone) = (&args[0], &args[1]);

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    record.set_phone(new_phone)?;
    Ok("Phone number updated.".to_string())
}

/// `phone <name>` — show a contact's phone number.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult {
    let name = args
        .first()
        .ok_or(CommandError::MissingArgument(MISSING_NAME_OR_PHONE))?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    let phone = record
        .phone()
        .map_or_else(|| "None".to_string(), |p| p.to_string());
    Ok(format!("{}: {}", name, phone))
}

/// `all` — every record's display line, one per line, in book order.
pub fn show_all(book: &AddressBook) -> CommandResult {
    Ok(book
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>` — attach a birthday to a contact.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::MissingArgument(MISSING_NAME_OR_PHONE));
    }
    let (name, birthday) = (&args[0], &args[1]);

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    record.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>` — show a contact's birthday, `N/A` if unset.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult {
    let name = args
        .first()
        .ok_or(CommandError::MissingArgument(MISSING_NAME_OR_PHONE))?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    let birthday = record
        .birthday()
        .map_or_else(|| "N/A".to_string(), |b| b.to_string());
    Ok(format!("{}: {}", name, birthday))
}

/// `birthdays` — contacts whose birthday falls inside the upcoming window.
///
/// An empty result is reported as [`CommandError::NoUpcomingBirthdays`], a
/// soft condition the loop renders like any other message.
pub fn show_birthdays(book: &AddressBook, today: NaiveDate, window_days: u64) -> CommandResult {
    let upcoming = book.upcoming_birthdays(today, window_days);
    debug!(count = upcoming.len(), %today, window_days, "birthday scan");

    if upcoming.is_empty() {
        return Err(CommandError::NoUpcomingBirthdays);
    }
    Ok(upcoming
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
