use dioxus::prelude::*;
use ui::views::SignupView;

use crate::use_destination_handler;

#[component]
pub fn Signup() -> Element {
    let navigate = use_destination_handler();

    rsx! {
        SignupView { on_navigate: navigate }
    }
}
