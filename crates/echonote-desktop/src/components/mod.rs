//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod card;
mod dialog;
mod new_note_card;
mod note_card;

pub use new_note_card::NewNoteCard;
pub use note_card::NoteCard;
