//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact's stored data: a name, at most one phone number, and at most
/// one birthday.
///
/// The name is fixed at creation and serves as the record's identity inside
/// the [`AddressBook`](crate::book::AddressBook). Phone and birthday start
/// absent and are attached later through the setters. Both are single
/// slots: setting again overwrites, never accumulates — one phone per
/// contact is a deliberate choice, not an accident of naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    phone: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given name and no phone or birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phone: None,
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The contact's phone number, if one has been set.
    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate and store a phone number, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input is not exactly
    /// 10 digits; the stored phone is left untouched in that case.
    pub fn set_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phone = Some(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Parse and store a birthday, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is not a
    /// real `DD.MM.YYYY` date; the stored birthday is left untouched.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }
}

// Canonical one-line rendering used by the `all` and `birthdays` commands.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phone ", self.name)?;
        match &self.phone {
            Some(phone) => write!(f, "{}", phone)?,
            None => write!(f, "None")?,
        }
        write!(f, ", birthday: ")?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "N/A"),
        }
    }
}
