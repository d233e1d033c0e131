//! Login page route.

use dioxus::prelude::*;
use ui::views::LoginView;

use crate::use_destination_handler;

#[component]
pub fn Login() -> Element {
    let navigate = use_destination_handler();

    rsx! {
        LoginView { on_navigate: navigate }
    }
}
