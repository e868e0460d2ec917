//! Address Book - Main entry point
//!
//! Runs the interactive loop: read a command line from stdin, dispatch it
//! against the in-memory address book, print the reply. All logging goes
//! to stderr so stdout stays clean for the conversation.

use address_book::commands::{execute, parse, Command};
use address_book::{AddressBook, Config};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Address book starting");

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to the address book bot!");
    prompt(&mut stdout, &config.prompt)?;

    for line in stdin.lock().lines() {
        let line = line?;

        let command = match parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                prompt(&mut stdout, &config.prompt)?;
                continue;
            }
        };
        let exiting = matches!(command, Command::Exit);

        let today = chrono::Local::now().date_naive();
        match execute(&mut book, command, today) {
            Ok(reply) => println!("{}", reply),
            Err(e) => {
                error!("command failed: {}", e);
                println!("{}", e);
            }
        }

        if exiting {
            break;
        }
        prompt(&mut stdout, &config.prompt)?;
    }

    info!("Address book shutdown complete");
    Ok(())
}

/// Print the prompt without a trailing newline and flush it out.
fn prompt(stdout: &mut io::Stdout, text: &str) -> io::Result<()> {
    write!(stdout, "{}", text)?;
    stdout.flush()
}
