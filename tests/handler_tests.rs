//! Integration tests for the command surface.
//!
//! Drives the handlers the way the command loop does (parsed argument
//! lists against a shared book) and checks the exact user-facing strings,
//! since those strings are the program's whole interface.

use chrono::NaiveDate;
use rolodex::handlers::{
    add_birthday, add_contact, change_phone, show_all, show_birthday, show_birthdays, show_phone,
};
use rolodex::{parse_input, AddressBook, CommandError};

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn add_reports_added_then_updated() {
    let mut book = AddressBook::new();

    assert_eq!(
        add_contact(&args(&["Alice", "0123456789"]), &mut book).unwrap(),
        "Contact added."
    );
    assert_eq!(
        add_contact(&args(&["Alice", "9876543210"]), &mut book).unwrap(),
        "Contact updated."
    );
    assert_eq!(book.len(), 1);
}

#[test]
fn add_requires_name_and_phone() {
    let mut book = AddressBook::new();
    let err = add_contact(&args(&["Alice"]), &mut book).unwrap_err();
    assert_eq!(err.to_string(), "Maybe you forgot enter name or phone?");
    assert!(book.is_empty());
}

#[test]
fn add_rejects_bad_phone_without_creating_contact() {
    let mut book = AddressBook::new();
    let err = add_contact(&args(&["Alice", "12345"]), &mut book).unwrap_err();
    assert_eq!(err.to_string(), "Phone number must be 10 digits.");
    assert!(book.find("Alice").is_none());
}

#[test]
fn change_fails_with_contact_not_found() {
    let mut book = AddressBook::new();
    let err = change_phone(&args(&["Ghost", "0123456789"]), &mut book).unwrap_err();
    assert!(matches!(err, CommandError::ContactNotFound(_)));
    assert_eq!(err.to_string(), "Contact is not found!");
}

#[test]
fn change_replaces_phone_after_validation() {
    let mut book = AddressBook::new();
    add_contact(&args(&["Alice", "0123456789"]), &mut book).unwrap();

    let err = change_phone(&args(&["Alice", "12"]), &mut book).unwrap_err();
    assert_eq!(err.to_string(), "Phone number must be 10 digits.");

    assert_eq!(
        change_phone(&args(&["Alice", "5550001111"]), &mut book).unwrap(),
        "Phone number updated."
    );
    assert_eq!(
        show_phone(&args(&["Alice"]), &book).unwrap(),
        "Alice: 5550001111"
    );
}

#[test]
fn phone_lookup_is_exact_and_case_sensitive() {
    let mut book = AddressBook::new();
    add_contact(&args(&["Alice", "0123456789"]), &mut book).unwrap();

    assert!(show_phone(&args(&["alice"]), &book).is_err());
    assert_eq!(
        show_phone(&args(&["Alice"]), &book).unwrap(),
        "Alice: 0123456789"
    );
}

#[test]
fn all_lists_every_record_one_per_line() {
    let mut book = AddressBook::new();
    add_contact(&args(&["Bob", "1111111111"]), &mut book).unwrap();
    add_contact(&args(&["Alice", "0123456789"]), &mut book).unwrap();
    add_birthday(&args(&["Bob", "02.01.1990"]), &mut book).unwrap();

    assert_eq!(
        show_all(&book).unwrap(),
        "Contact name: Alice, phone 0123456789, birthday: N/A\n\
         Contact name: Bob, phone 1111111111, birthday: 02.01.1990"
    );
}

#[test]
fn all_on_empty_book_is_empty_string() {
    let book = AddressBook::new();
    assert_eq!(show_all(&book).unwrap(), "");
}

#[test]
fn birthday_commands_require_existing_contact() {
    let mut book = AddressBook::new();

    let err = add_birthday(&args(&["Ghost", "01.01.2000"]), &mut book).unwrap_err();
    assert!(matches!(err, CommandError::ContactNotFound(_)));

    let err = show_birthday(&args(&["Ghost"]), &book).unwrap_err();
    assert!(matches!(err, CommandError::ContactNotFound(_)));
}

#[test]
fn show_birthday_renders_date_or_placeholder() {
    let mut book = AddressBook::new();
    add_contact(&args(&["Alice", "0123456789"]), &mut book).unwrap();

    assert_eq!(show_birthday(&args(&["Alice"]), &book).unwrap(), "Alice: N/A");

    add_birthday(&args(&["Alice", "3.6.1990"]), &mut book).unwrap();
    assert_eq!(
        show_birthday(&args(&["Alice"]), &book).unwrap(),
        "Alice: 03.06.1990"
    );
}

#[test]
fn add_birthday_rejects_impossible_date() {
    let mut book = AddressBook::new();
    add_contact(&args(&["Alice", "0123456789"]), &mut book).unwrap();

    let err = add_birthday(&args(&["Alice", "31.02.2020"]), &mut book).unwrap_err();
    assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    assert!(book.find("Alice").unwrap().birthday().is_none());
}

#[test]
fn birthdays_separates_empty_result_from_matches() {
    let mut book = AddressBook::new();
    let today = date(2024, 6, 1);

    let err = show_birthdays(&book, today, 7).unwrap_err();
    assert!(matches!(err, CommandError::NoUpcomingBirthdays));
    assert_eq!(err.to_string(), "No birthdays during the next week!");

    add_contact(&args(&["Alice", "0123456789"]), &mut book).unwrap();
    add_birthday(&args(&["Alice", "03.06.1990"]), &mut book).unwrap();
    add_contact(&args(&["Bob", "1111111111"]), &mut book).unwrap();
    add_birthday(&args(&["Bob", "15.06.1990"]), &mut book).unwrap();

    assert_eq!(
        show_birthdays(&book, today, 7).unwrap(),
        "Contact name: Alice, phone 0123456789, birthday: 03.06.1990"
    );
}

#[test]
fn birthdays_crosses_the_year_boundary() {
    let mut book = AddressBook::new();
    add_contact(&args(&["Jan", "0123456789"]), &mut book).unwrap();
    add_birthday(&args(&["Jan", "02.01.1990"]), &mut book).unwrap();

    assert_eq!(
        show_birthdays(&book, date(2024, 12, 30), 7).unwrap(),
        "Contact name: Jan, phone 0123456789, birthday: 02.01.1990"
    );
}

#[test]
fn parse_input_feeds_handlers_as_the_loop_would() {
    let mut book = AddressBook::new();

    let (command, parsed) = parse_input("ADD Alice 0123456789").unwrap();
    assert_eq!(command, "add");
    assert_eq!(
        add_contact(&parsed, &mut book).unwrap(),
        "Contact added."
    );

    let (command, parsed) = parse_input("Show-Birthday Alice").unwrap();
    assert_eq!(command, "show-birthday");
    assert_eq!(show_birthday(&parsed, &book).unwrap(), "Alice: N/A");
}
