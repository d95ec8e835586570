//! Rolodex - Main entry point
//!
//! Starts the interactive assistant bot: initializes logging, loads
//! configuration, and runs the command loop over stdin/stdout until the
//! user exits.

use anyhow::Result;
use rolodex::{AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep the interactive stdout clean)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting assistant bot with a {}-day birthday window",
        config.birthday_window_days
    );

    let mut book = AddressBook::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    rolodex::repl::run(stdin.lock(), &mut stdout, &mut book, &config)?;

    info!("Assistant bot shutdown complete");
    Ok(())
}
