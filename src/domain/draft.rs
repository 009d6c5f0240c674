//! The transient edit-form buffer.

/// The content of the note form before it is committed.
///
/// Not persisted. A draft only commits when both fields are non-empty after
/// trimming; everything else is a silent no-op at the controller level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    /// Creates a draft with the given text.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// True when both trimmed fields are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Resets both fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
