//! echonote-core - Core library for Echonote
//!
//! This crate contains the shared models, the note-creation session state
//! machine, and the speech-capture contract used by the desktop client.

pub mod error;
pub mod models;
pub mod session;
pub mod speech;
pub mod time;

pub use error::{Error, Result};
pub use models::{Note, NoteId};
pub use session::{CreationMode, CreationSession};
