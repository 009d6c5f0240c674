//! The persisted note record.

use crate::domain::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-authored note.
///
/// Serializes to the persisted wire format
/// `{"id": <integer>, "title": <string>, "content": <string>}`. The
/// collection it lives in preserves insertion order; the record itself
/// carries no ordering or timestamp metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Creates a note with the given id and user-supplied text.
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_sets_all_fields() {
        let note = Note::new(NoteId::from(1), "Grocery List", "Milk, Eggs");
        assert_eq!(note.id, NoteId::from(1));
        assert_eq!(note.title, "Grocery List");
        assert_eq!(note.content, "Milk, Eggs");
    }

    #[test]
    fn display_shows_title_and_id() {
        let note = Note::new(NoteId::from(2), "Meeting Notes", "3pm");
        assert_eq!(note.to_string(), "Meeting Notes [2]");
    }

    #[test]
    fn serializes_to_wire_format() {
        let note = Note::new(NoteId::from(1), "A", "B");
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"id":1,"title":"A","content":"B"}"#);
    }

    #[test]
    fn deserializes_from_wire_format() {
        let json = r#"{"id": 1700000000000, "title": "X", "content": "Y"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id.as_i64(), 1_700_000_000_000);
        assert_eq!(note.title, "X");
        assert_eq!(note.content, "Y");
    }

    #[test]
    fn collection_roundtrip_preserves_order() {
        let notes = vec![
            Note::new(NoteId::from(3), "c", "3"),
            Note::new(NoteId::from(1), "a", "1"),
            Note::new(NoteId::from(2), "b", "2"),
        ];

        let json = serde_json::to_string(&notes).unwrap();
        let parsed: Vec<Note> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, notes);
    }

    #[test]
    fn rejects_missing_fields() {
        let json = r#"{"id": 1, "title": "no content"}"#;
        let result: Result<Note, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_integer_id() {
        let json = r#"{"id": "one", "title": "t", "content": "c"}"#;
        let result: Result<Note, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
