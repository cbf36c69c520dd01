//! The `SnapshotStore` trait — the persistence seam.
//!
//! Implemented by storage backends (e.g. `rolo-store-file`). The snapshot
//! format belongs to the backend; the core never interprets it, it only
//! round-trips the book through it at session start and end.

use crate::book::AddressBook;

/// Abstraction over whole-book snapshot persistence.
///
/// Synchronous by design: the directory is exclusively owned by one session,
/// and snapshot I/O happens only at process start and end.
pub trait SnapshotStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the persisted book. Yields a fresh empty book when no snapshot
  /// exists yet; any other failure is an error.
  fn load(&self) -> Result<AddressBook, Self::Error>;

  /// Persist the book's full state as an opaque snapshot.
  fn save(&self, book: &AddressBook) -> Result<(), Self::Error>;
}
