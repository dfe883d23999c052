//! Modal dialog components
//!
//! A trigger elsewhere flips the `open` signal; the overlay and the close
//! affordance flip it back. Closing never touches the content's own state, so
//! an in-progress draft survives reopening the dialog.

use dioxus::prelude::*;

/// Dialog host: renders nothing while closed, overlay plus content while open.
#[component]
pub fn DialogRoot(mut open: Signal<bool>, children: Element) -> Element {
    if !open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-overlay",
            style: "
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.5);
                z-index: 40;
            ",
            onclick: move |_| open.set(false),
        }
        {children}
    }
}

/// Centered dialog panel.
#[component]
pub fn DialogContent(style: Option<String>, children: Element) -> Element {
    let extra = style.unwrap_or_default();

    rsx! {
        div {
            class: "dialog-content",
            style: "
                position: fixed;
                left: 50%;
                top: 50%;
                transform: translate(-50%, -50%);
                width: 640px;
                max-width: 90vw;
                height: 60vh;
                display: flex;
                flex-direction: column;
                background: #f1f5f9;
                color: #334155;
                border-radius: 6px;
                overflow: hidden;
                z-index: 50;
                {extra}
            ",
            {children}
        }
    }
}

/// Dialog heading.
#[component]
pub fn DialogTitle(children: Element) -> Element {
    rsx! {
        span {
            class: "dialog-title",
            style: "font-size: 14px; font-weight: 600; color: #1e293b;",
            {children}
        }
    }
}

/// Close affordance in the dialog's top-right corner.
#[component]
pub fn DialogClose(mut open: Signal<bool>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "dialog-close",
            style: "
                position: absolute;
                right: 0;
                top: 0;
                padding: 8px 12px;
                background: transparent;
                border: none;
                color: #64748b;
                font-size: 16px;
                cursor: pointer;
            ",
            onclick: move |_| open.set(false),
            "\u{00d7}"
        }
    }
}
