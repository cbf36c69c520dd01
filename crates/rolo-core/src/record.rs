//! Record — one contact entry: a name, its phones, and an optional birthday.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  field::{Birthday, Name, Phone},
};

/// Sentinel returned by [`Record::show_birthday`] when no birthday is set.
pub const NO_BIRTHDAY: &str = "No birthday set";

/// One contact. The name is fixed at creation and identifies the record
/// within an [`AddressBook`](crate::book::AddressBook); phones and the
/// birthday are populated incrementally through the mutators below.
///
/// Every mutator validates before it mutates, so a failed operation leaves
/// the record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  name:     Name,
  phones:   Vec<Phone>,
  birthday: Option<Birthday>,
}

impl Record {
  /// Create an empty record holding only a name.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name:     Name::new(name),
      phones:   Vec::new(),
      birthday: None,
    }
  }

  pub fn name(&self) -> &Name { &self.name }

  /// Phones in insertion order. Duplicates are permitted.
  pub fn phones(&self) -> &[Phone] { &self.phones }

  pub fn birthday(&self) -> Option<&Birthday> { self.birthday.as_ref() }

  // ── Phones ────────────────────────────────────────────────────────────────

  /// Validate `phone` and append it. No duplicate check.
  pub fn add_phone(&mut self, phone: &str) -> Result<()> {
    self.phones.push(Phone::new(phone)?);
    Ok(())
  }

  /// Remove the first phone equal to `phone`.
  /// Fails with [`Error::PhoneNotFound`] when there is no match.
  pub fn remove_phone(&mut self, phone: &str) -> Result<()> {
    let idx = self.position(phone).ok_or(Error::PhoneNotFound)?;
    self.phones.remove(idx);
    Ok(())
  }

  /// Replace the phone equal to `old` with `new`, keeping its position.
  ///
  /// `new` is validated first: an invalid replacement fails the edit and
  /// leaves the old phone in place.
  pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
    let idx = self.position(old).ok_or(Error::OldPhoneNotFound)?;
    self.phones[idx] = Phone::new(new)?;
    Ok(())
  }

  /// Pure lookup: the first phone equal to `phone`, if any.
  pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
    self.phones.iter().find(|p| p.as_str() == phone)
  }

  fn position(&self, phone: &str) -> Option<usize> {
    self.phones.iter().position(|p| p.as_str() == phone)
  }

  // ── Birthday ──────────────────────────────────────────────────────────────

  /// Validate `birthday` and set it, replacing any prior value.
  pub fn add_birthday(&mut self, birthday: &str) -> Result<()> {
    self.birthday = Some(Birthday::new(birthday)?);
    Ok(())
  }

  /// The birthday's text, or [`NO_BIRTHDAY`] when none is set. Never fails.
  pub fn show_birthday(&self) -> &str {
    self.birthday.as_ref().map_or(NO_BIRTHDAY, Birthday::as_str)
  }
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Contact name: {}, phones: ", self.name)?;
    for (i, phone) in self.phones.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{phone}")?;
    }
    if let Some(bday) = &self.birthday {
      write!(f, ", birthday: {bday}")?;
    }
    Ok(())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn record_with(phones: &[&str]) -> Record {
    let mut record = Record::new("John");
    for p in phones {
      record.add_phone(p).unwrap();
    }
    record
  }

  #[test]
  fn new_record_is_empty() {
    let record = Record::new("John");
    assert_eq!(record.name().as_str(), "John");
    assert!(record.phones().is_empty());
    assert!(record.birthday().is_none());
  }

  #[test]
  fn add_phone_validates() {
    let mut record = Record::new("John");
    record.add_phone("1111111111").unwrap();
    assert_eq!(record.add_phone("123"), Err(Error::InvalidPhone));
    assert_eq!(record.phones().len(), 1);
  }

  #[test]
  fn add_phone_permits_duplicates() {
    let record = record_with(&["1111111111", "1111111111"]);
    assert_eq!(record.phones().len(), 2);
  }

  #[test]
  fn remove_phone_removes_first_match_only() {
    let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
    record.remove_phone("1111111111").unwrap();
    let left: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
    assert_eq!(left, ["2222222222", "1111111111"]);
  }

  #[test]
  fn remove_phone_missing_fails() {
    let mut record = record_with(&["1111111111"]);
    assert_eq!(record.remove_phone("2222222222"), Err(Error::PhoneNotFound));
    assert_eq!(record.phones().len(), 1);
  }

  #[test]
  fn edit_phone_replaces_in_place() {
    let mut record = record_with(&["1111111111", "2222222222"]);
    record.edit_phone("1111111111", "3333333333").unwrap();
    let phones: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
    assert_eq!(phones, ["3333333333", "2222222222"]);
  }

  #[test]
  fn edit_phone_missing_old_fails() {
    let mut record = record_with(&["1111111111"]);
    let err = record.edit_phone("9999999999", "2222222222").unwrap_err();
    assert_eq!(err, Error::OldPhoneNotFound);
    assert_eq!(err.to_string(), "old phone not found");
  }

  #[test]
  fn edit_phone_invalid_new_keeps_old() {
    let mut record = record_with(&["1111111111"]);
    assert_eq!(
      record.edit_phone("1111111111", "abc"),
      Err(Error::InvalidPhone)
    );
    // The failed edit must not have deleted the original.
    assert!(record.find_phone("1111111111").is_some());
  }

  #[test]
  fn find_phone_is_pure_lookup() {
    let record = record_with(&["1111111111"]);
    assert_eq!(
      record.find_phone("1111111111").map(Phone::as_str),
      Some("1111111111")
    );
    assert!(record.find_phone("2222222222").is_none());
  }

  #[test]
  fn add_birthday_validates_and_replaces() {
    let mut record = Record::new("John");
    assert_eq!(record.add_birthday("junk"), Err(Error::InvalidBirthday));
    record.add_birthday("15.06.1990").unwrap();
    record.add_birthday("16.06.1990").unwrap();
    assert_eq!(record.show_birthday(), "16.06.1990");
  }

  #[test]
  fn show_birthday_sentinel_when_unset() {
    assert_eq!(Record::new("John").show_birthday(), NO_BIRTHDAY);
  }

  #[test]
  fn display_without_birthday() {
    let record = record_with(&["1111111111", "2222222222"]);
    assert_eq!(
      record.to_string(),
      "Contact name: John, phones: 1111111111; 2222222222"
    );
  }

  #[test]
  fn display_with_birthday() {
    let mut record = record_with(&["1111111111"]);
    record.add_birthday("15.06.1990").unwrap();
    assert_eq!(
      record.to_string(),
      "Contact name: John, phones: 1111111111, birthday: 15.06.1990"
    );
  }
}
