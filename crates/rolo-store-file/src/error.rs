//! Error type for `rolo-store-file`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("reading snapshot {path}: {source}")]
  Read {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("writing snapshot {path}: {source}")]
  Write {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("decoding snapshot {path}: {source}")]
  Decode {
    path:   PathBuf,
    source: serde_json::Error,
  },

  #[error("encoding snapshot: {0}")]
  Encode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
