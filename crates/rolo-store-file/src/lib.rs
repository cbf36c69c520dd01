//! File backend for the rolo snapshot store.
//!
//! Serialises the whole [`rolo_core::AddressBook`] to a single JSON file at
//! an injected path. The format is an implementation detail of this crate;
//! the core treats the snapshot as opaque.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::FileStore;
