//! Core types for the rolo contact directory.
//!
//! This crate is deliberately free of I/O dependencies. All other crates
//! depend on it; it holds the validated field types, the [`Record`] and
//! [`AddressBook`] model, the upcoming-birthday query, and the
//! [`SnapshotStore`] persistence seam.

pub mod book;
pub mod error;
pub mod field;
pub mod record;
pub mod store;

pub use book::{AddressBook, UpcomingBirthday};
pub use error::{Error, ErrorKind, Result};
pub use field::{Birthday, Name, Phone};
pub use record::Record;
pub use store::SnapshotStore;
