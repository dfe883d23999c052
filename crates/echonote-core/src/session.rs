//! Note-creation session state machine.
//!
//! Tracks the in-progress draft of the creation card across its three modes:
//! onboarding (choose between dictation and typing), text editing, and
//! recording. The session is pure state; the desktop card wires it to the
//! webview recognizer and to its owner's callback.

/// Current mode of a [`CreationSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CreationMode {
    /// Initial mode offering a choice between dictation and typed entry.
    #[default]
    Onboarding,
    /// The user is typing (or has stopped dictating and may keep typing).
    TextEditing,
    /// The shared recognizer is live and transcript snapshots overwrite the draft.
    Recording,
}

/// State of one note-creation cycle.
///
/// Invariant under user edits: the session is in [`CreationMode::Onboarding`]
/// exactly when the draft is empty. Clearing the draft returns to onboarding;
/// a successful [`take_draft`](Self::take_draft) resets the whole session so
/// the card can be reused for the next note.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreationSession {
    mode: CreationMode,
    draft: String,
}

impl CreationSession {
    /// Create a fresh session in onboarding with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> CreationMode {
        self.mode
    }

    /// The unsaved draft text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the session is back at the onboarding choice.
    #[must_use]
    pub fn is_onboarding(&self) -> bool {
        self.mode == CreationMode::Onboarding
    }

    /// Whether a recording is in progress.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.mode == CreationMode::Recording
    }

    /// Switch from onboarding to typed entry. Idempotent once editing.
    pub fn start_text_editing(&mut self) {
        if self.mode == CreationMode::Onboarding {
            self.mode = CreationMode::TextEditing;
        }
    }

    /// Replace the draft with user-edited text.
    ///
    /// Editing the draft down to the empty string returns the session to
    /// onboarding; a non-empty edit while onboarding moves to text editing.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        if self.draft.is_empty() {
            self.mode = CreationMode::Onboarding;
        } else if self.mode == CreationMode::Onboarding {
            self.mode = CreationMode::TextEditing;
        }
    }

    /// Enter recording mode.
    ///
    /// The caller is responsible for checking recognizer availability first
    /// and for starting the capture session. Calling this while already
    /// recording is allowed; the bridge restarts the recognizer (last start
    /// wins).
    pub fn start_recording(&mut self) {
        self.mode = CreationMode::Recording;
    }

    /// Leave recording mode, preserving the draft.
    ///
    /// Safe to call when no recording is in progress; only an active
    /// recording transitions, everything else is a no-op.
    pub fn stop_recording(&mut self) {
        if self.mode == CreationMode::Recording {
            self.mode = CreationMode::TextEditing;
        }
    }

    /// Apply a cumulative transcript snapshot from the recognizer.
    ///
    /// Each snapshot is the full transcript so far and overwrites the draft
    /// outright; later snapshots always win. The mode is untouched: interim
    /// recognizer output never bounces the session back to onboarding.
    pub fn apply_transcript(&mut self, snapshot: impl Into<String>) {
        self.draft = snapshot.into();
    }

    /// Take the finished draft, resetting the session for the next note.
    ///
    /// Returns `None` without any state change when the draft is empty (a
    /// user-prevented no-op, not an error).
    pub fn take_draft(&mut self) -> Option<String> {
        if self.draft.is_empty() {
            return None;
        }
        self.mode = CreationMode::Onboarding;
        Some(std::mem::take(&mut self.draft))
    }
}
