//! Error types for `rolo-core`.

use thiserror::Error;

/// The broad category of a core error, for callers that branch on the
/// taxonomy rather than on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// A field value failed its format contract. Raised at construction time,
  /// before any mutation.
  Validation,
  /// An exact-match lookup required for a mutation found nothing.
  NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("phone must be 10 digits")]
  InvalidPhone,

  #[error("invalid date format")]
  InvalidBirthday,

  #[error("phone not found")]
  PhoneNotFound,

  #[error("old phone not found")]
  OldPhoneNotFound,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::InvalidPhone | Self::InvalidBirthday => ErrorKind::Validation,
      Self::PhoneNotFound | Self::OldPhoneNotFound => ErrorKind::NotFound,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
