//! Root application component.

use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

use echonote_core::{Note, NoteId};

use crate::components::{NewNoteCard, NoteCard};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        ToastProvider {
            NoteBoard {}
        }
    }
}

/// Board owning the note collection and the two card callbacks.
#[component]
fn NoteBoard() -> Element {
    let mut notes = use_signal(Vec::<Note>::new);

    let on_note_created = move |content: String| {
        let note = Note::new(content);
        tracing::info!("Created note: {}", note.id);
        notes.write().insert(0, note);
    };

    let on_note_deleted = move |id: NoteId| {
        tracing::info!("Deleted note: {}", id);
        notes.write().retain(|note| note.id != id);
    };

    rsx! {
        div {
            class: "board",
            style: "
                min-height: 100vh;
                padding: 40px;
                box-sizing: border-box;
                background: #0f172a;
                font-family: system-ui, -apple-system, sans-serif;
            ",

            div {
                class: "board-grid",
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    grid-auto-rows: 250px;
                    gap: 24px;
                ",

                NewNoteCard { on_note_created }

                for note in notes() {
                    {
                        let note_id = note.id;
                        rsx! {
                            NoteCard {
                                key: "{note_id}",
                                note,
                                on_note_deleted,
                            }
                        }
                    }
                }
            }
        }
    }
}
