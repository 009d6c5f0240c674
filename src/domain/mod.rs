//! Core domain types: notes, identifiers, and the edit draft.

mod draft;
mod note;
mod note_id;

pub use draft::Draft;
pub use note::Note;
pub use note_id::{IdGenerator, NoteId, ParseNoteIdError};
