//! `rolo` — interactive assistant for the rolo contact directory.
//!
//! # Usage
//!
//! ```text
//! rolo --snapshot ~/.local/share/rolo/contacts.json
//! ROLO_SNAPSHOT=contacts.json rolo
//! ```
//!
//! Commands: `add`, `change`, `phone`, `add-birthday`, `show-birthday`,
//! `birthdays`, `all`, and `exit`/`close` (and synonyms) to save and quit.

mod commands;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use commands::Outcome;
use rolo_core::SnapshotStore;
use rolo_store_file::FileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "rolo",
  about = "Personal contact directory with birthday reminders"
)]
struct Args {
  /// Path of the snapshot file the book is loaded from and saved to.
  #[arg(
    long,
    env = "ROLO_SNAPSHOT",
    value_name = "FILE",
    default_value = "contacts.json"
  )]
  snapshot: std::path::PathBuf,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();
  let store = FileStore::new(&args.snapshot);
  let mut book = store.load().context("loading snapshot")?;
  info!(records = book.len(), "address book loaded");

  println!("Welcome! This is your assistant bot. Enter a command.");

  let stdin = io::stdin();
  let mut input = stdin.lock();

  loop {
    print!(">>> ");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    // EOF behaves like an exit command: save and leave.
    let eof = input.read_line(&mut line).context("reading input")? == 0;

    let (command, cmd_args) = parse_input(&line);
    if !eof && command.is_empty() {
      continue;
    }

    if !eof {
      match commands::dispatch(&command, &cmd_args, &mut book) {
        Outcome::Reply(reply) => {
          println!("{reply}");
          continue;
        }
        Outcome::Quit => {}
      }
    }

    store.save(&book).context("saving snapshot")?;
    info!(records = book.len(), "address book saved");
    println!("Goodbye!");
    return Ok(());
  }
}

/// Split user input into a lowercased command and its arguments.
fn parse_input(input: &str) -> (String, Vec<String>) {
  let mut parts = input.split_whitespace();
  let command = parts.next().unwrap_or_default().to_lowercase();
  (command, parts.map(str::to_string).collect())
}
