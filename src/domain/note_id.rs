//! Integer note identifier with a monotonic, timestamp-derived generator.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unique identifier for notes.
///
/// Ids are plain integers in the persisted format. New ids are derived from
/// the Unix timestamp in milliseconds at creation time (see [`IdGenerator`]),
/// assigned once and immutable thereafter.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Returns the raw integer value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when parsing an invalid note id string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': expected an integer", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(NoteId)
            .map_err(|_| ParseNoteIdError {
                value: s.to_string(),
            })
    }
}

/// Generates fresh note ids from the current timestamp in milliseconds.
///
/// Raw millisecond timestamps collide under rapid successive calls, so the
/// generator bumps past the last issued id when the clock has not advanced:
/// each call returns `max(now_millis, last + 1)`. Seeding with
/// [`IdGenerator::starting_after`] keeps a generator from reissuing ids
/// already present in a loaded collection.
#[derive(Debug)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Creates a generator with no history.
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Creates a generator that never issues an id at or below `last_seen`.
    pub fn starting_after(last_seen: i64) -> Self {
        Self { last: last_seen }
    }

    /// Issues the next id.
    ///
    /// Saturates at `i64::MAX` rather than overflowing when seeded from a
    /// collection carrying a maximal id.
    pub fn next_id(&mut self) -> NoteId {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        NoteId(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
