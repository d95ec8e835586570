//! The interactive command loop.
//!
//! Reads one line at a time, splits it into a command token plus arguments,
//! and dispatches to the matching handler. Every outcome, success or
//! failure, is rendered as a plain message; the loop only ends on the exit
//! commands or end of input.

use crate::book::AddressBook;
use crate::config::Config;
use crate::handlers;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::debug;

const GREETING: &str = "Welcome to the assistant bot!";
const FAREWELL: &str = "Good bye!";
const PROMPT: &str = "Enter a command: ";

/// Split raw input into a lower-cased command token and its arguments.
///
/// Splits on whitespace; arguments keep their original case (names are
/// case-sensitive). Returns `None` for blank input.
pub fn parse_input(raw: &str) -> Option<(String, Vec<String>)> {
    let mut parts = raw.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// Route one parsed command to its handler and render the outcome.
///
/// Unknown commands come back as `"Invalid command."`; handler errors are
/// converted to their display strings. `today` anchors the birthday window
/// so the routing itself stays deterministic under test.
pub fn dispatch(
    command: &str,
    args: &[String],
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: u64,
) -> String {
    debug!(command, ?args, "dispatching command");
    let result = match command {
        "hello" => Ok("How can I help you?".to_string()),
        "add" => handlers::add_contact(args, book),
        "change" => handlers::change_phone(args, book),
        "phone" => handlers::show_phone(args, book),
        "all" => handlers::show_all(book),
        "add-birthday" => handlers::add_birthday(args, book),
        "show-birthday" => handlers::show_birthday(args, book),
        "birthdays" => handlers::show_birthdays(book, today, window_days),
        _ => Ok("Invalid command.".to_string()),
    };
    result.unwrap_or_else(|err| err.to_string())
}

/// Whether the command ends the session.
fn is_exit(command: &str) -> bool {
    matches!(command, "exit" | "close")
}

/// Run the command loop until an exit command or end of input.
///
/// Generic over the streams so tests can drive it with in-memory buffers;
/// `main` hands it locked stdin/stdout.
pub fn run<R, W>(input: R, output: &mut W, book: &mut AddressBook, config: &Config) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // End of input behaves like an exit command
            None => {
                writeln!(output, "{}", FAREWELL)?;
                return Ok(());
            }
        };

        let Some((command, args)) = parse_input(&line) else {
            writeln!(output, "You have not entered anything")?;
            continue;
        };

        if is_exit(&command) {
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        }

        let today = Local::now().date_naive();
        let reply = dispatch(&command, &args, book, today, config.birthday_window_days);
        writeln!(output, "{}", reply)?;
    }
}
