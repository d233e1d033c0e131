use dioxus::prelude::*;

/// Inline empty state inside a card: a message and one action button.
#[component]
pub fn EmptyPrompt(message: String, action_label: String, on_action: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "empty-state",
            p { "{message}" }
            button {
                class: "btn-primary",
                onclick: move |_| on_action.call(()),
                "{action_label}"
            }
        }
    }
}

/// Message-only empty state.
#[component]
pub fn EmptyNote(message: String) -> Element {
    rsx! {
        p { class: "empty-state-text", "{message}" }
    }
}

/// Full-width empty state used when a whole tab has nothing to show.
#[component]
pub fn EmptyCard(
    title: String,
    message: String,
    action_label: String,
    on_action: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "empty-state-card",
            h3 { "{title}" }
            p { "{message}" }
            button {
                class: "btn-primary",
                onclick: move |_| on_action.call(()),
                "{action_label}"
            }
        }
    }
}
