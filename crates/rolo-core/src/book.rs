//! AddressBook — the name-keyed record collection and the upcoming-birthday
//! query.

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
  field::{BIRTHDAY_FORMAT, Birthday},
  record::Record,
};

/// Sentinel returned by [`AddressBook::to_text`] for an empty book.
pub const EMPTY_BOOK: &str = "Address book is empty.";

/// How many days ahead of today (inclusive) the birthday query looks.
const LOOKAHEAD_DAYS: i64 = 7;

// ─── UpcomingBirthday ────────────────────────────────────────────────────────

/// One entry in the result of [`AddressBook::upcoming_birthdays`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
  pub name: String,
  /// The occurrence date, weekend-shifted to the following Monday.
  pub date: NaiveDate,
}

impl UpcomingBirthday {
  /// The shifted date in the same `DD.MM.YYYY` form birthdays are entered
  /// in.
  pub fn date_text(&self) -> String {
    self.date.format(BIRTHDAY_FORMAT).to_string()
  }
}

// ─── AddressBook ─────────────────────────────────────────────────────────────

/// A contact directory keyed by name.
///
/// Iteration order is insertion order; replacing a record under an existing
/// name keeps its original position. Every stored record is valid because
/// field construction failures prevent insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
  records: Vec<Record>,
}

impl AddressBook {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  /// Records in insertion order.
  pub fn records(&self) -> impl Iterator<Item = &Record> {
    self.records.iter()
  }

  /// Insert `record`, or fully replace an existing entry with the same name.
  ///
  /// Overwrite, not merge: the prior record's phones and birthday are
  /// discarded. A replacement keeps the entry's display position.
  pub fn add_record(&mut self, record: Record) {
    match self.position(record.name().as_str()) {
      Some(idx) => self.records[idx] = record,
      None => self.records.push(record),
    }
  }

  /// Pure lookup by exact name.
  pub fn find(&self, name: &str) -> Option<&Record> {
    self.records.iter().find(|r| r.name().as_str() == name)
  }

  pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
    self.records.iter_mut().find(|r| r.name().as_str() == name)
  }

  /// Remove the entry for `name`. A missing name is a no-op, not an error.
  pub fn delete(&mut self, name: &str) {
    if let Some(idx) = self.position(name) {
      self.records.remove(idx);
    }
  }

  fn position(&self, name: &str) -> Option<usize> {
    self.records.iter().position(|r| r.name().as_str() == name)
  }

  // ── Birthday query ────────────────────────────────────────────────────────

  /// Contacts whose next birthday falls within seven days of the local
  /// system date. See [`AddressBook::upcoming_birthdays`].
  pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
    self.upcoming_birthdays(Local::now().date_naive())
  }

  /// Contacts whose next birthday occurrence falls within the closed
  /// interval `[today, today + 7 days]`, in book iteration order.
  ///
  /// The occurrence is this year's date (the stored year is ignored), rolled
  /// to next year when it already passed. An occurrence landing on a
  /// Saturday or Sunday is shifted to the following Monday in the reported
  /// date; the shift plays no part in the inclusion test. A Feb 29 birthday
  /// counts as Mar 1 in non-leap target years. Records whose stored birthday
  /// fails to re-parse are skipped.
  pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
    let mut upcoming = Vec::new();

    for record in &self.records {
      let Some(bday) = record.birthday().and_then(Birthday::date) else {
        continue;
      };

      let Some(mut occurrence) = occurrence_in(bday, today.year()) else {
        continue;
      };
      if occurrence < today {
        let Some(next) = occurrence_in(bday, today.year() + 1) else {
          continue;
        };
        occurrence = next;
      }

      let days_diff = (occurrence - today).num_days();
      if (0..=LOOKAHEAD_DAYS).contains(&days_diff) {
        upcoming.push(UpcomingBirthday {
          name: record.name().as_str().to_string(),
          date: shift_off_weekend(occurrence),
        });
      }
    }

    upcoming
  }

  /// Render the whole book, one record per line in iteration order, or
  /// [`EMPTY_BOOK`] when there are no records.
  pub fn to_text(&self) -> String {
    if self.records.is_empty() {
      EMPTY_BOOK.to_string()
    } else {
      self
        .records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
    }
  }
}

// ─── Date helpers ────────────────────────────────────────────────────────────

/// The calendar date `bday` falls on in `year`, ignoring the stored year.
/// Feb 29 maps to Mar 1 when `year` is not a leap year, so the only `None`
/// case of `from_ymd_opt` is absorbed.
fn occurrence_in(bday: NaiveDate, year: i32) -> Option<NaiveDate> {
  NaiveDate::from_ymd_opt(year, bday.month(), bday.day())
    .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Move a Saturday or Sunday date to the following Monday; weekdays pass
/// through unchanged.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
  let from_monday = u64::from(date.weekday().num_days_from_monday());
  if from_monday >= 5 {
    date + Days::new(7 - from_monday)
  } else {
    date
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
