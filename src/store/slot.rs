//! Binding between an in-memory value and one named store slot.

use crate::store::{KeyValueStore, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// What happened when a slot was loaded.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The slot was absent; the caller's default value is in effect.
    Absent,
    /// The slot held a payload that deserialized cleanly.
    Loaded,
    /// The slot held a payload that failed to deserialize; the caller's
    /// default value is in effect. Non-fatal by contract.
    Unparsable(serde_json::Error),
}

impl LoadOutcome {
    /// True when the default value stood in for an unreadable payload.
    pub fn fell_back(&self) -> bool {
        matches!(self, LoadOutcome::Unparsable(_))
    }
}

/// An in-memory value persisted to a single named slot as JSON.
///
/// `open` performs the load; every mutation writes the whole value back.
/// Mutations replace the in-memory value before persisting, so a write
/// failure surfaces as an error but never rolls the value back: in-memory
/// and persisted state may diverge on failure, which callers accept by
/// inspecting the returned `Result`.
#[derive(Debug)]
pub struct StoredValue<S, T> {
    store: S,
    key: String,
    value: T,
    outcome: LoadOutcome,
}

impl<S, T> StoredValue<S, T>
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned,
{
    /// Loads the slot, falling back to `default` when the slot is absent or
    /// its payload does not deserialize. Backend read failures are returned
    /// as errors; a bad payload is not.
    pub fn open(store: S, key: impl Into<String>, default: T) -> Result<Self, StoreError> {
        let key = key.into();
        let (value, outcome) = match store.get(&key)? {
            None => (default, LoadOutcome::Absent),
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(value) => (value, LoadOutcome::Loaded),
                Err(e) => (default, LoadOutcome::Unparsable(e)),
            },
        };

        Ok(Self {
            store,
            key,
            value,
            outcome,
        })
    }

    /// Returns the current in-memory value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Reports how the initial load went.
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    /// Replaces the value and persists it.
    pub fn set(&mut self, value: T) -> Result<(), StoreError> {
        self.value = value;
        self.persist()
    }

    /// Replaces the value with `f(current)` and persists it.
    ///
    /// The closure always sees the latest in-memory value, so updates
    /// compose without reading back from the store.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> Result<(), StoreError> {
        self.value = f(&self.value);
        self.persist()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let payload = serde_json::to_string(&self.value).map_err(|e| StoreError::Serialize {
            key: self.key.clone(),
            source: e,
        })?;
        self.store.set(&self.key, &payload)
    }
}
