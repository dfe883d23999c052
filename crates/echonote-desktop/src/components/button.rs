//! Button component

use dioxus::prelude::*;

/// Visual variants for [`Button`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    const fn colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Primary => ("#a3e635", "#1e293b"),
            Self::Secondary => ("#cbd5e1", "#334155"),
            Self::Danger => ("#0f172a", "#fca5a5"),
        }
    }
}

/// Plain action button; never submits a form.
#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    style: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let (bg, fg) = variant.unwrap_or_default().colors();
    let extra = style.unwrap_or_default();

    rsx! {
        button {
            r#type: "button",
            class: "button",
            style: "
                background: {bg};
                color: {fg};
                border: none;
                border-radius: 4px;
                padding: 8px 14px;
                font-size: 14px;
                font-weight: 600;
                cursor: pointer;
                {extra}
            ",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
