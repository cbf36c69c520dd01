//! Command handlers — map parsed user commands onto core operations and
//! render the results (and core errors) as reply text.
//!
//! The core never formats user-facing messages for failures; every core
//! error surfaces here and is rendered as `Error: {message}`.

use rolo_core::{AddressBook, Error, Phone, Record};
use tracing::debug;

/// What the REPL should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
  /// Print this reply and keep going.
  Reply(String),
  /// Save the book and terminate the session.
  Quit,
}

/// Route one parsed command to its handler.
pub fn dispatch(command: &str, args: &[String], book: &mut AddressBook) -> Outcome {
  debug!(%command, args = args.len(), "dispatching");

  let reply = match command {
    "add" => add_contact(args, book),
    "change" => change_contact(args, book),
    "phone" => show_phone(args, book),
    "add-birthday" => add_birthday(args, book),
    "show-birthday" => show_birthday(args, book),
    "birthdays" => birthdays(book),
    "all" => show_all(book),
    "exit" | "close" | "goodbye" | "good" | "bye" => return Outcome::Quit,
    _ => "Unknown command. Try again.".to_string(),
  };

  Outcome::Reply(reply)
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

fn add_contact(args: &[String], book: &mut AddressBook) -> String {
  let [name, phone] = args else {
    return usage("add NAME PHONE");
  };
  if book.find(name).is_none() {
    book.add_record(Record::new(name.as_str()));
  }
  // The record was just ensured above.
  let Some(record) = book.find_mut(name) else {
    return no_contact(name);
  };
  match record.add_phone(phone) {
    Ok(()) => format!("Contact updated: {record}"),
    Err(e) => error_reply(e),
  }
}

fn change_contact(args: &[String], book: &mut AddressBook) -> String {
  let [name, old_phone, new_phone] = args else {
    return usage("change NAME OLD_PHONE NEW_PHONE");
  };
  let Some(record) = book.find_mut(name) else {
    return no_contact(name);
  };
  match record.edit_phone(old_phone, new_phone) {
    Ok(()) => format!("Phone updated for {name}."),
    Err(e) => error_reply(e),
  }
}

fn show_phone(args: &[String], book: &AddressBook) -> String {
  let [name] = args else {
    return usage("phone NAME");
  };
  let Some(record) = book.find(name) else {
    return no_contact(name);
  };
  let phones = record
    .phones()
    .iter()
    .map(Phone::as_str)
    .collect::<Vec<_>>()
    .join("; ");
  format!("{name}'s phones: {phones}")
}

fn add_birthday(args: &[String], book: &mut AddressBook) -> String {
  let [name, bday] = args else {
    return usage("add-birthday NAME DD.MM.YYYY");
  };
  let Some(record) = book.find_mut(name) else {
    return no_contact(name);
  };
  match record.add_birthday(bday) {
    Ok(()) => format!("Birthday added for {name}."),
    Err(e) => error_reply(e),
  }
}

fn show_birthday(args: &[String], book: &AddressBook) -> String {
  let [name] = args else {
    return usage("show-birthday NAME");
  };
  let Some(record) = book.find(name) else {
    return no_contact(name);
  };
  format!("{name}'s birthday is {}.", record.show_birthday())
}

fn birthdays(book: &AddressBook) -> String {
  let upcoming = book.get_upcoming_birthdays();
  if upcoming.is_empty() {
    return "No upcoming birthdays this week.".to_string();
  }
  upcoming
    .iter()
    .map(|u| format!("{}: {}", u.name, u.date_text()))
    .collect::<Vec<_>>()
    .join("\n")
}

fn show_all(book: &AddressBook) -> String {
  book.to_text()
}

// ─── Reply helpers ────────────────────────────────────────────────────────────

fn error_reply(e: Error) -> String {
  format!("Error: {e}")
}

fn no_contact(name: &str) -> String {
  format!("No contact with name '{name}' found.")
}

fn usage(expected: &str) -> String {
  format!("Error: expected `{expected}`")
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn run(command: &str, args: &[&str], book: &mut AddressBook) -> String {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    match dispatch(command, &args, book) {
      Outcome::Reply(reply) => reply,
      Outcome::Quit => panic!("unexpected quit"),
    }
  }

  #[test]
  fn add_creates_record_and_appends_phone() {
    let mut book = AddressBook::new();

    let reply = run("add", &["John", "1234567890"], &mut book);
    assert_eq!(reply, "Contact updated: Contact name: John, phones: 1234567890");

    // Second add reuses the existing record.
    run("add", &["John", "0987654321"], &mut book);
    assert_eq!(book.find("John").unwrap().phones().len(), 2);
  }

  #[test]
  fn add_with_bad_phone_reports_core_error() {
    let mut book = AddressBook::new();
    let reply = run("add", &["John", "123"], &mut book);
    assert_eq!(reply, "Error: phone must be 10 digits");
  }

  #[test]
  fn add_with_missing_args_reports_usage() {
    let mut book = AddressBook::new();
    let reply = run("add", &["John"], &mut book);
    assert_eq!(reply, "Error: expected `add NAME PHONE`");
  }

  #[test]
  fn change_edits_existing_phone() {
    let mut book = AddressBook::new();
    run("add", &["John", "1234567890"], &mut book);

    let reply = run("change", &["John", "1234567890", "1111111111"], &mut book);
    assert_eq!(reply, "Phone updated for John.");
    assert!(book.find("John").unwrap().find_phone("1111111111").is_some());
  }

  #[test]
  fn change_unknown_contact() {
    let mut book = AddressBook::new();
    let reply = run("change", &["Ghost", "1234567890", "1111111111"], &mut book);
    assert_eq!(reply, "No contact with name 'Ghost' found.");
  }

  #[test]
  fn phone_lists_numbers() {
    let mut book = AddressBook::new();
    run("add", &["John", "1234567890"], &mut book);
    run("add", &["John", "1111111111"], &mut book);

    let reply = run("phone", &["John"], &mut book);
    assert_eq!(reply, "John's phones: 1234567890; 1111111111");
  }

  #[test]
  fn birthday_commands_round_trip() {
    let mut book = AddressBook::new();
    run("add", &["John", "1234567890"], &mut book);

    let reply = run("add-birthday", &["John", "15.06.1990"], &mut book);
    assert_eq!(reply, "Birthday added for John.");

    let reply = run("show-birthday", &["John"], &mut book);
    assert_eq!(reply, "John's birthday is 15.06.1990.");
  }

  #[test]
  fn show_birthday_sentinel_when_unset() {
    let mut book = AddressBook::new();
    run("add", &["John", "1234567890"], &mut book);

    let reply = run("show-birthday", &["John"], &mut book);
    assert_eq!(reply, "John's birthday is No birthday set.");
  }

  #[test]
  fn birthdays_empty_book() {
    let mut book = AddressBook::new();
    let reply = run("birthdays", &[], &mut book);
    assert_eq!(reply, "No upcoming birthdays this week.");
  }

  #[test]
  fn all_renders_book_or_sentinel() {
    let mut book = AddressBook::new();
    assert_eq!(run("all", &[], &mut book), "Address book is empty.");

    run("add", &["John", "1234567890"], &mut book);
    assert_eq!(
      run("all", &[], &mut book),
      "Contact name: John, phones: 1234567890"
    );
  }

  #[test]
  fn unknown_command() {
    let mut book = AddressBook::new();
    let reply = run("frobnicate", &[], &mut book);
    assert_eq!(reply, "Unknown command. Try again.");
  }

  #[test]
  fn exit_synonyms_quit() {
    let mut book = AddressBook::new();
    for cmd in ["exit", "close", "goodbye", "good", "bye"] {
      assert_eq!(dispatch(cmd, &[], &mut book), Outcome::Quit);
    }
  }
}
