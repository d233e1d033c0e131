use dioxus::prelude::*;

/// Dimmed full-screen backdrop with a centred card.
/// Clicking the backdrop triggers `on_close`; clicks inside the card do not.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { "{title}" }
                {children}
            }
        }
    }
}
