//! The note list controller.
//!
//! [`Notebook`] owns the notes collection, the transient edit draft, and the
//! editing marker. Durability is delegated to a [`StoredValue`] over an
//! injected [`KeyValueStore`]; the whole collection is rewritten on every
//! mutation. Opening a notebook performs the slot load before any state is
//! observable, so there is no window where default data could be mistaken
//! for loaded data.

use crate::domain::{Draft, IdGenerator, Note, NoteId};
use crate::store::{KeyValueStore, LoadOutcome, StoreError, StoredValue};

/// The fixed slot key holding the serialized notes collection.
pub const NOTES_SLOT: &str = "notes";

/// The notes shown when the slot is empty or missing.
///
/// Not persisted until the first mutation writes the collection back.
pub fn default_notes() -> Vec<Note> {
    vec![
        Note::new(NoteId::from(1), "Grocery List", "Milk, Eggs, Bread, Butter"),
        Note::new(NoteId::from(2), "go to tution", "go to tution at 5pm"),
        Note::new(NoteId::from(3), "Meeting Notes", "Meeting with the team at 3pm"),
    ]
}

/// Owns the notes collection, the edit draft, and the editing marker.
///
/// All transitions run to completion synchronously; guard failures are
/// silent no-ops, and the only errors are persistence failures surfaced
/// from the store.
pub struct Notebook<S: KeyValueStore> {
    notes: StoredValue<S, Vec<Note>>,
    draft: Draft,
    editing_id: Option<NoteId>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> Notebook<S> {
    /// Opens a notebook over `store`, loading the `"notes"` slot.
    ///
    /// An absent or unparsable slot yields the three [`default_notes`]; the
    /// unparsable case is observable through [`Notebook::load_outcome`].
    /// Backend read failures propagate.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let notes = StoredValue::open(store, NOTES_SLOT, default_notes())?;
        let last_seen = notes
            .get()
            .iter()
            .map(|note| note.id.as_i64())
            .max()
            .unwrap_or(0);

        Ok(Self {
            notes,
            draft: Draft::default(),
            editing_id: None,
            ids: IdGenerator::starting_after(last_seen),
        })
    }

    /// The notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        self.notes.get()
    }

    /// The current draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The note being edited, or `None` in add mode.
    pub fn editing_id(&self) -> Option<NoteId> {
        self.editing_id
    }

    /// Reports how the initial slot load went.
    pub fn load_outcome(&self) -> &LoadOutcome {
        self.notes.load_outcome()
    }

    /// Looks up a note by id.
    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes().iter().find(|note| note.id == id)
    }

    /// Replaces the draft text.
    pub fn set_draft(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.draft = Draft::new(title, content);
    }

    /// Appends a new note built from the draft.
    ///
    /// Silent no-op returning `Ok(None)` unless both trimmed draft fields
    /// are non-empty. On success the note gets a fresh id, the collection
    /// is persisted, and the draft is cleared; the editing marker is left
    /// alone. The draft stores its text as typed, untrimmed.
    pub fn add_note(&mut self) -> Result<Option<NoteId>, StoreError> {
        if !self.draft.is_valid() {
            return Ok(None);
        }

        let id = self.ids.next_id();
        let note = Note::new(id, self.draft.title.clone(), self.draft.content.clone());
        let result = self.notes.update(|notes| {
            let mut notes = notes.clone();
            notes.push(note);
            notes
        });
        // Draft clears whether or not the write landed.
        self.draft.clear();

        result.map(|()| Some(id))
    }

    /// Copies the note's text into the draft and marks it as being edited.
    ///
    /// Returns `false` (leaving all state untouched) when no note has the
    /// given id.
    pub fn begin_edit(&mut self, id: NoteId) -> bool {
        let Some(note) = self.find(id) else {
            return false;
        };

        self.draft = Draft::new(note.title.clone(), note.content.clone());
        self.editing_id = Some(id);
        true
    }

    /// Confirms the current edit.
    ///
    /// When the trimmed draft is valid, the collection is rewritten with
    /// the target note rebuilt from its own stored title and content — the
    /// draft text is not copied into the note; the draft only gates whether
    /// the rewrite happens. The draft and editing marker are cleared
    /// regardless of the gate.
    pub fn update_note(&mut self) -> Result<(), StoreError> {
        let result = if self.draft.is_valid() {
            let target = self.editing_id;
            self.notes.update(|notes| {
                notes
                    .iter()
                    .map(|note| {
                        if Some(note.id) == target {
                            Note::new(note.id, note.title.clone(), note.content.clone())
                        } else {
                            note.clone()
                        }
                    })
                    .collect()
            })
        } else {
            Ok(())
        };

        self.draft.clear();
        self.editing_id = None;
        result
    }

    /// Removes the note with the given id, if present, and persists the
    /// collection either way. No confirmation, no undo.
    pub fn delete_note(&mut self, id: NoteId) -> Result<(), StoreError> {
        self.notes.update(|notes| {
            notes
                .iter()
                .filter(|note| note.id != id)
                .cloned()
                .collect()
        })
    }

    /// The context-sensitive confirm action: adds when nothing is being
    /// edited, updates otherwise. Returns the new note's id on an add.
    pub fn commit(&mut self) -> Result<Option<NoteId>, StoreError> {
        match self.editing_id {
            None => self.add_note(),
            Some(_) => self.update_note().map(|()| None),
        }
    }
}
