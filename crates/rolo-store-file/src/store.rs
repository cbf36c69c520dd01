//! [`FileStore`] — the file implementation of [`SnapshotStore`].

use std::{
  fs,
  io::ErrorKind,
  path::{Path, PathBuf},
};

use rolo_core::{AddressBook, SnapshotStore};
use tracing::{debug, info};

use crate::{Error, Result};

/// A snapshot store backed by a single JSON file at an injected path.
///
/// Nothing is touched until `load` or `save` is called, so constructing a
/// store over a path that does not exist yet is fine.
#[derive(Debug, Clone)]
pub struct FileStore {
  path: PathBuf,
}

impl FileStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path { &self.path }
}

impl SnapshotStore for FileStore {
  type Error = Error;

  /// Load the persisted book. A missing file is not an error: it yields a
  /// fresh empty book, matching first-run behaviour.
  fn load(&self) -> Result<AddressBook> {
    let raw = match fs::read(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        info!(path = %self.path.display(), "no snapshot found, starting empty");
        return Ok(AddressBook::new());
      }
      Err(source) => {
        return Err(Error::Read { path: self.path.clone(), source });
      }
    };

    let book = serde_json::from_slice(&raw)
      .map_err(|source| Error::Decode { path: self.path.clone(), source })?;
    debug!(path = %self.path.display(), "snapshot loaded");
    Ok(book)
  }

  fn save(&self, book: &AddressBook) -> Result<()> {
    let raw = serde_json::to_vec(book)?;
    fs::write(&self.path, raw)
      .map_err(|source| Error::Write { path: self.path.clone(), source })?;
    debug!(path = %self.path.display(), "snapshot saved");
    Ok(())
  }
}
