use dioxus::prelude::*;

use crate::config::use_branding;
use crate::navigation::Destination;

/// Landing page top bar.
#[component]
pub fn Navbar(on_navigate: EventHandler<Destination>) -> Element {
    let branding = use_branding();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-logo",
                a {
                    href: Destination::Home.path(),
                    span { class: "logo-text", "{branding.landing.name}" }
                }
            }
            div {
                class: "navbar-actions",
                button {
                    class: "login-button",
                    onclick: move |_| on_navigate.call(Destination::Login),
                    "LOGIN"
                }
                button {
                    class: "get-started-button",
                    onclick: move |_| on_navigate.call(Destination::Signup),
                    "GET STARTED"
                }
            }
        }
    }
}
