//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive session on stdin/stdout, and
//! saves the book when the session ends.

use anyhow::{Context, Result};
use contact_book::commands::session;
use contact_book::{AddressBookStore, Config, JsonFileStore};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Logging goes to stderr; stdout belongs to the session
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let store = JsonFileStore::new(&config.address_book_path);
    let mut book = store
        .load()
        .with_context(|| format!("loading {}", store.path().display()))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let session_result = session::run(
        stdin.lock(),
        &mut stdout,
        &mut book,
        config.birthday_window_days,
        || chrono::Local::now().date_naive(),
    );

    // Save even if the terminal went away mid-session
    store
        .save(&book)
        .with_context(|| format!("saving {}", store.path().display()))?;

    session_result.context("reading commands")?;
    info!("Contact book shutdown complete");
    Ok(())
}
