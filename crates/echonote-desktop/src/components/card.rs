//! Card container components

use dioxus::prelude::*;

/// Rounded surface used by the board cards.
#[component]
pub fn Card(style: Option<String>, children: Element) -> Element {
    let extra = style.unwrap_or_default();

    rsx! {
        div {
            class: "card",
            style: "
                display: flex;
                flex-direction: column;
                border-radius: 6px;
                overflow: hidden;
                height: 100%;
                {extra}
            ",
            {children}
        }
    }
}

/// Inner content area of a [`Card`].
#[component]
pub fn CardContent(style: Option<String>, children: Element) -> Element {
    let extra = style.unwrap_or_default();

    rsx! {
        div {
            class: "card-content",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 20px;
                flex: 1;
                {extra}
            ",
            {children}
        }
    }
}
