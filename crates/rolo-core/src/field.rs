//! Validated field values — the leaf types of the contact model.
//!
//! Each field wraps the caller-supplied text and enforces its format rule at
//! construction time. A value that constructs successfully is never stored in
//! a partially-valid state; invalid input is rejected before anything is
//! mutated.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The date format birthdays are entered and rendered in: `DD.MM.YYYY`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// ─── Name ────────────────────────────────────────────────────────────────────

/// A contact's name. Doubles as the record's key within an
/// [`AddressBook`](crate::book::AddressBook). No normalisation is applied:
/// lookups are case- and whitespace-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
  /// Wrap `value` as a name. Always succeeds.
  pub fn new(value: impl Into<String>) -> Self { Self(value.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Phone ───────────────────────────────────────────────────────────────────

/// A telephone number: exactly 10 decimal digits, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
  /// Validate and wrap `value`.
  /// Fails with [`Error::InvalidPhone`] unless it is exactly 10 ASCII digits.
  pub fn new(value: impl Into<String>) -> Result<Self> {
    let value = value.into();
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
      Ok(Self(value))
    } else {
      Err(Error::InvalidPhone)
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Phone {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Birthday ────────────────────────────────────────────────────────────────

/// A birthday in `DD.MM.YYYY` text form.
///
/// The caller's text is the stored value and round-trips unchanged; the
/// calendar date is re-derived on demand by the birthday query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday(String);

impl Birthday {
  /// Validate and wrap `value`.
  /// Fails with [`Error::InvalidBirthday`] unless the text parses as a real
  /// `DD.MM.YYYY` calendar date.
  pub fn new(value: impl Into<String>) -> Result<Self> {
    let value = value.into();
    NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT)
      .map_err(|_| Error::InvalidBirthday)?;
    Ok(Self(value))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// Re-parse the stored text. `None` cannot occur for a value constructed
  /// through [`Birthday::new`]; the query treats it as a skip anyway.
  pub fn date(&self) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&self.0, BIRTHDAY_FORMAT).ok()
  }
}

impl fmt::Display for Birthday {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
