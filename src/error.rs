//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can produce.
///
/// Every variant is recoverable: the command loop converts it into a
/// user-facing message and keeps running. `NoUpcomingBirthdays` is a soft
/// condition (an empty query result) rather than a hard failure, but it
/// travels the same path so the loop has a single way to render outcomes.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Too few arguments for a command; carries the user-facing diagnostic
    #[error("{0}")]
    MissingArgument(&'static str),

    /// Lookup by name found no record
    #[error("Contact is not found!")]
    ContactNotFound(String),

    /// A field value failed validation (phone digits/length, date format)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The birthday query matched nothing inside the window
    #[error("No birthdays during the next week!")]
    NoUpcomingBirthdays,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for handler results.
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
