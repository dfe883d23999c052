//! Note model

use std::fmt;
use uuid::Uuid;

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A saved note on the board.
///
/// Notes are immutable once created: the board owner constructs one when the
/// creation card emits finished text and removes it when a display card
/// requests deletion. No edit operation exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Unique identifier, assigned by the board owner
    pub id: NoteId,
    /// Plain text content
    pub content: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Note {
    /// Create a new note with the given content
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            content: content.into(),
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Get the first line as a preview, truncated to `max_len` characters
    #[must_use]
    pub fn preview(&self, max_len: usize) -> String {
        self.content
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(max_len)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_new() {
        let note = Note::new("Buy milk");
        assert_eq!(note.content, "Buy milk");
        assert!(note.created_at > 0);
    }

    #[test]
    fn test_preview_first_line_truncated() {
        let note = Note::new("first line of a longer note\nsecond line");
        assert_eq!(note.preview(10), "first line");
    }
}
