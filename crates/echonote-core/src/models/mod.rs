//! Data models for Echonote

mod note;

pub use note::{Note, NoteId};
