//! Address Book - demo entry point
//!
//! Walks through a short session against an in-memory address book and prints
//! the book after each stage. Logs go to stderr; set `LOG_LEVEL=debug` to see
//! every mutation.

use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SEPARATOR: &str = "--------------------------------------";

fn main() -> Result<()> {
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);

    // Initialize logging (stderr only so the rendered book stays on stdout)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config {
        error!("Failed to load configuration: {}", e);
        return Err(e.into());
    }
    info!(log_level = %log_level, "Configuration loaded successfully");

    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    println!("{}", SEPARATOR);

    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    println!("{}", book);

    let john = book.find_mut("John").context("John should be in the book")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);
    println!("{}", SEPARATOR);

    if let Some(phone) = john.find_phone("5555555555") {
        println!("{}: {}", john.name(), phone);
    }

    book.delete("Jane")?;
    println!("{}", SEPARATOR);
    println!("{}", book);

    info!(records = book.len(), "Demo complete");
    Ok(())
}
