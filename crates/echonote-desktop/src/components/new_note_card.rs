//! Note creation card with typed and dictated entry.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};

use echonote_core::speech::CaptureUpdate;
use echonote_core::CreationSession;

use super::button::{Button, ButtonVariant};
use super::card::{Card, CardContent};
use super::dialog::{DialogClose, DialogContent, DialogRoot, DialogTitle};
use crate::config::recognizer_config;
use crate::speech;

/// How often the poll task drains recognizer output while recording.
const CAPTURE_POLL_INTERVAL: Duration = Duration::from_millis(150);

/// Card that captures a new note and emits the finished text to its owner.
///
/// The session state machine lives in [`CreationSession`]; this component
/// wires it to the dialog, the textarea, and the shared webview recognizer.
/// The draft survives closing and reopening the dialog.
#[component]
pub fn NewNoteCard(on_note_created: EventHandler<String>) -> Element {
    let mut dialog_open = use_signal(|| false);
    let mut session = use_signal(CreationSession::new);
    let toasts = use_toast();

    let start_editor = move |_| {
        session.write().start_text_editing();
    };

    let content_changed = move |evt: Event<FormData>| {
        session.write().edit_draft(evt.value());
    };

    let start_recording = move |_| {
        spawn(async move {
            // Capability is probed at call time so a runtime without the
            // speech API degrades to text-only entry.
            let available = speech::speech_capture_available().await;
            if !apply_capability_probe(&mut session.write(), available) {
                rfd::AsyncMessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("Recording unavailable")
                    .set_description(
                        "Speech recognition is not supported here. \
                         You can still type your note.",
                    )
                    .show()
                    .await;
                return;
            }

            let config = recognizer_config();
            if let Err(error) = speech::start_speech_capture(&config).await {
                tracing::error!("Failed to start speech capture: {}", error);
                session.write().stop_recording();
                return;
            }

            // Drain snapshots while recording, plus one final drain after it
            // ends so the result the recognizer flushes on stop still
            // reaches the draft.
            loop {
                tokio::time::sleep(CAPTURE_POLL_INTERVAL).await;
                let still_recording = session.read().is_recording();

                match speech::poll_speech_capture().await {
                    Ok(update) => {
                        for error in &update.errors {
                            tracing::warn!("Speech recognition error: {}", error);
                        }
                        if should_apply_snapshot(&session.read(), &update) {
                            session.write().apply_transcript(update.transcript());
                        }
                    }
                    Err(error) => {
                        tracing::warn!("Speech capture poll failed: {}", error);
                    }
                }

                if !still_recording {
                    break;
                }
            }

            // Recording can also end without the stop button (the draft was
            // cleared back to onboarding), so the recognizer is shut down on
            // every exit path. Stopping twice is safe.
            if let Err(error) = speech::stop_speech_capture().await {
                tracing::warn!("Failed to stop speech capture: {}", error);
            }
        });
    };

    let stop_recording = move |_| {
        session.write().stop_recording();
        spawn(async move {
            if let Err(error) = speech::stop_speech_capture().await {
                tracing::warn!("Failed to stop speech capture: {}", error);
            }
        });
    };

    let save_note = move |evt: Event<FormData>| {
        evt.prevent_default();

        // Empty draft: user-prevented no-op, no message.
        let Some(content) = session.write().take_draft() else {
            return;
        };

        on_note_created.call(content);
        toasts.success(
            "Note created".to_string(),
            ToastOptions::new().description("The note was added to the board"),
        );
    };

    let current = session();
    let is_onboarding = current.is_onboarding();
    let is_recording = current.is_recording();
    let draft = current.draft().to_string();

    rsx! {
        div {
            class: "new-note-trigger",
            style: "cursor: pointer; text-align: left;",
            onclick: move |_| dialog_open.set(true),

            Card {
                style: "background: #a3e635;",

                CardContent {
                    span {
                        style: "font-size: 18px; font-weight: 600; color: #1e293b;",
                        "Add note"
                    }
                    p {
                        style: "font-size: 13px; line-height: 1.5; color: #3f6212; margin: 0;",
                        "Record an audio note and have it transcribed to text, or just type."
                    }
                }
            }
        }

        DialogRoot { open: dialog_open,
            DialogContent {
                DialogClose { open: dialog_open }

                form {
                    onsubmit: save_note,
                    style: "flex: 1; display: flex; flex-direction: column;",

                    div {
                        style: "
                            flex: 1;
                            display: flex;
                            flex-direction: column;
                            gap: 12px;
                            padding: 20px;
                        ",

                        DialogTitle { "Add note" }

                        if is_onboarding {
                            p {
                                style: "font-size: 18px; line-height: 1.6; color: #334155;",
                                "Start by "
                                button {
                                    r#type: "button",
                                    class: "link-button",
                                    style: "
                                        background: none;
                                        border: none;
                                        padding: 0;
                                        font: inherit;
                                        font-weight: 600;
                                        color: #7c3aed;
                                        cursor: pointer;
                                    ",
                                    onclick: start_recording,
                                    "recording an audio note"
                                }
                                " or, if you prefer, "
                                button {
                                    r#type: "button",
                                    class: "link-button",
                                    style: "
                                        background: none;
                                        border: none;
                                        padding: 0;
                                        font: inherit;
                                        font-weight: 600;
                                        color: #7c3aed;
                                        cursor: pointer;
                                    ",
                                    onclick: start_editor,
                                    "just use text"
                                }
                                "."
                            }
                        } else {
                            textarea {
                                class: "draft-input",
                                style: "
                                    flex: 1;
                                    font-size: 14px;
                                    line-height: 1.5;
                                    color: #334155;
                                    background: transparent;
                                    border: none;
                                    outline: none;
                                    resize: none;
                                ",
                                autofocus: true,
                                value: "{draft}",
                                oninput: content_changed,
                            }
                        }
                    }

                    if is_recording {
                        Button {
                            variant: ButtonVariant::Danger,
                            style: "width: 100%; padding: 14px; border-radius: 0;",
                            onclick: stop_recording,
                            "Recording! Click to stop."
                        }
                    } else {
                        button {
                            r#type: "submit",
                            class: "save-button",
                            style: "
                                width: 100%;
                                padding: 14px;
                                background: #a3e635;
                                color: #1e293b;
                                border: none;
                                font-size: 14px;
                                font-weight: 600;
                                cursor: pointer;
                            ",
                            "Save note"
                        }
                    }
                }
            }
        }
    }
}

/// Apply the call-time capability probe to the session.
///
/// Only an available recognizer moves the session into recording; an
/// unavailable one leaves it completely untouched so the user can fall back
/// to typed entry.
fn apply_capability_probe(session: &mut CreationSession, available: bool) -> bool {
    if available {
        session.start_recording();
    }
    available
}

/// Whether a polled snapshot should overwrite the draft.
///
/// Snapshots apply while recording and during the final drain after a stop;
/// a draft the user cleared back to onboarding stays cleared, and an update
/// without segments never touches the draft.
fn should_apply_snapshot(session: &CreationSession, update: &CaptureUpdate) -> bool {
    update.has_segments() && !session.is_onboarding()
}

#[cfg(test)]
mod tests {
    use super::*;
    use echonote_core::CreationMode;
    use pretty_assertions::assert_eq;

    fn update_with(segments: &[&str]) -> CaptureUpdate {
        CaptureUpdate {
            segments: segments.iter().map(ToString::to_string).collect(),
            errors: Vec::new(),
        }
    }

    #[test]
    fn unavailable_capability_leaves_session_untouched() {
        let mut session = CreationSession::new();
        assert!(!apply_capability_probe(&mut session, false));
        assert!(session.is_onboarding());
        assert_eq!(session.draft(), "");

        session.edit_draft("draft in progress");
        assert!(!apply_capability_probe(&mut session, false));
        assert_eq!(session.mode(), CreationMode::TextEditing);
        assert_eq!(session.draft(), "draft in progress");
    }

    #[test]
    fn available_capability_enters_recording() {
        let mut session = CreationSession::new();
        assert!(apply_capability_probe(&mut session, true));
        assert!(session.is_recording());
    }

    #[test]
    fn snapshots_apply_while_recording() {
        let mut session = CreationSession::new();
        session.start_recording();

        assert!(should_apply_snapshot(&session, &update_with(&["buy ", "milk"])));
    }

    #[test]
    fn final_drain_after_stop_still_applies() {
        let mut session = CreationSession::new();
        session.start_recording();
        session.apply_transcript("last dictated");
        session.stop_recording();

        let update = update_with(&["last dictated words"]);
        assert!(should_apply_snapshot(&session, &update));

        session.apply_transcript(update.transcript());
        assert_eq!(session.draft(), "last dictated words");
    }

    #[test]
    fn cleared_draft_ignores_late_snapshots() {
        let mut session = CreationSession::new();
        session.start_recording();
        session.apply_transcript("some dictated words");
        session.edit_draft("");

        assert!(!should_apply_snapshot(&session, &update_with(&["some dictated words"])));
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn updates_without_segments_never_touch_the_draft() {
        let mut session = CreationSession::new();
        session.start_recording();
        session.apply_transcript("kept");

        assert!(!should_apply_snapshot(&session, &update_with(&[])));
        assert_eq!(session.draft(), "kept");
    }
}
