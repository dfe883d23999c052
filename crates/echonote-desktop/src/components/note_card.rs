//! Note display card with delete confirmation.

use dioxus::prelude::*;

use echonote_core::time::format_relative_time;
use echonote_core::{Note, NoteId};

use super::button::{Button, ButtonVariant};
use super::card::{Card, CardContent};
use super::dialog::{DialogClose, DialogContent, DialogRoot, DialogTitle};

/// Read-only card for an existing note.
///
/// The trigger shows the relative timestamp and a content preview; the dialog
/// shows the full content and a confirmation control that emits the note's id
/// to the owner. Deletion authority rests entirely with the owning board.
#[component]
pub fn NoteCard(note: Note, on_note_deleted: EventHandler<NoteId>) -> Element {
    let mut dialog_open = use_signal(|| false);

    let now_ms = chrono::Utc::now().timestamp_millis();
    let relative_time = format_relative_time(note.created_at, now_ms);
    let preview = note.preview(180);
    let note_id = note.id;

    let request_deletion = move |_| {
        on_note_deleted.call(note_id);
    };

    rsx! {
        div {
            class: "note-trigger",
            style: "cursor: pointer; text-align: left;",
            onclick: move |_| dialog_open.set(true),

            Card {
                style: "background: #f1f5f9;",

                CardContent {
                    span {
                        style: "font-size: 13px; font-weight: 500; color: #1e293b;",
                        "{relative_time}"
                    }
                    p {
                        style: "font-size: 13px; line-height: 1.5; color: #475569; margin: 0;",
                        "{preview}"
                    }
                }
            }
        }

        DialogRoot { open: dialog_open,
            DialogContent {
                DialogClose { open: dialog_open }

                div {
                    style: "
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        padding: 20px;
                        overflow-y: auto;
                    ",

                    DialogTitle { "{relative_time}" }

                    p {
                        style: "font-size: 16px; line-height: 1.6; color: #334155; white-space: pre-wrap;",
                        "{note.content}"
                    }
                }

                Button {
                    variant: ButtonVariant::Danger,
                    style: "width: 100%; padding: 14px; border-radius: 0;",
                    onclick: request_deletion,
                    "Delete this note?"
                }
            }
        }
    }
}
