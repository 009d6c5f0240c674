//! Persistent key/value storage and the single-slot value binding.
//!
//! The store is deliberately generic: it maps string keys to string payloads
//! and knows nothing about notes. [`StoredValue`] layers JSON
//! (de)serialization and default-value fallback on top of any backend.

mod json_file;
mod memory;
mod slot;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use slot::{LoadOutcome, StoredValue};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the storage backends and the slot binding.
///
/// Failures are explicit here rather than swallowed: callers decide whether
/// to surface, warn, or ignore.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create store directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read slot '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write slot '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize value for slot '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A named-slot string store.
///
/// Implementations are injectable wherever persistence is needed; tests use
/// [`MemoryStore`], the CLI uses [`JsonFileStore`]. Payloads are opaque
/// strings; callers own the encoding.
pub trait KeyValueStore {
    /// Reads the payload stored under `key`, or `None` when the slot is
    /// absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the payload stored under `key`. The previous payload, if
    /// any, is overwritten; there is no conflict detection.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
