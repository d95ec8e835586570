//! Rolodex - a line-oriented assistant bot for a personal address book.
//!
//! The bot keeps contacts (name, one phone number, optional birthday) in
//! memory for the lifetime of the process and answers lookup, list, and
//! upcoming-birthday queries through a simple command loop.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the contact record built from those value objects
//! - **book**: the keyed record collection and the birthday-window scan
//! - **handlers**: one thin function per user command
//! - **repl**: input parsing and the interactive loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repl;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError};
pub use models::Record;
pub use repl::parse_input;
