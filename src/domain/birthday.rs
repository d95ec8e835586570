//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual form used for parsing and display: `DD.MM.YYYY`.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday, entered and displayed as `DD.MM.YYYY`.
///
/// Validated as a real calendar date at construction time and stored as a
/// date value, so `31.02.2020` or `00.01.2020` can never be represented.
/// `Display` renders the zero-padded textual form back, so parsing followed
/// by formatting round-trips every valid `DD.MM.YYYY` input.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::parse("03.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "03.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string into a Birthday.
    ///
    /// Like the underlying chrono parser, unpadded day or month digits are
    /// tolerated on input; display always zero-pads.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` carrying the offending
    /// string if it is not a real calendar date in `DD.MM.YYYY` form.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Get the underlying date value.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next calendar date on which this birthday is observed, on or
    /// after `today`.
    ///
    /// Computes the month/day applied to `today`'s year; when that date has
    /// already passed, retries with the following year so a window spanning
    /// a year boundary still matches (e.g. today Dec 30, birthday Jan 2).
    ///
    /// A Feb 29 birthday is observed on Mar 1 in common years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(today.year());
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        }
    }

    /// The observed occurrence of this birthday in the given year.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()) {
            Some(date) => date,
            // Only Feb 29 in a common year can fail; observe it on Mar 1.
            None => NaiveDate::from_ymd_opt(year, 3, 1)
                .expect("March 1 exists in every year"),
        }
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support - exact inverse of `parse` for valid DD.MM.YYYY input
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
