//! Error types for echonote-core

use thiserror::Error;

/// Result type alias using echonote-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in echonote-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Speech recognition is not available in the current runtime
    #[error("Speech recognition is unavailable in this runtime")]
    SpeechUnavailable,

    /// A speech-capture bridge operation failed
    #[error("Speech capture error: {0}")]
    SpeechCapture(String),
}
