//! The address book: a keyed collection of contact records.
//!
//! This module owns every [`Record`] in the system. Records are keyed by
//! their exact name (case-sensitive, unique); adding under an existing name
//! replaces that name's record rather than creating a duplicate.

use crate::models::Record;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// The full collection of contact records, keyed by name.
///
/// Backed by a `BTreeMap`, so iteration (and therefore the output of the
/// `all` and `birthdays` commands) is name-ordered and deterministic for
/// identical state.
///
/// The book is the single mutable resource of the program and is built for
/// single-threaded use; callers embedding it in a multi-threaded context
/// must provide their own synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name.
    ///
    /// If a record with the same name already exists, it is replaced; the
    /// book never holds two records for one name.
    pub fn add(&mut self, record: Record) {
        debug!(name = record.name(), "adding record to address book");
        self.records.insert(record.name().to_string(), record);
    }

    /// Exact-match lookup by name. No fuzzy matching.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-match lookup returning a mutable record.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record with the given name.
    ///
    /// Removing an absent name is a no-op, not an error; the return value
    /// tells whether a record was actually removed.
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.records.remove(name).is_some();
        if removed {
            debug!(name, "deleted record from address book");
        }
        removed
    }

    /// Iterate over all records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose birthday is observed within the inclusive window
    /// `[today, today + window_days]`, in name order.
    ///
    /// Each stored birthday is projected onto its next observation on or
    /// after `today` (see [`Birthday::next_occurrence`]), which handles both
    /// the Feb 29 rule and windows that span a year boundary. Records
    /// without a birthday are never included.
    ///
    /// [`Birthday::next_occurrence`]: crate::domain::Birthday::next_occurrence
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u64) -> Vec<&Record> {
        let window_end = today
            .checked_add_days(Days::new(window_days))
            .unwrap_or(NaiveDate::MAX);

        self.records
            .values()
            .filter(|record| match record.birthday() {
                Some(birthday) => birthday.next_occurrence(today) <= window_end,
                None => false,
            })
            .collect()
    }
}
