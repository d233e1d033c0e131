use dioxus::prelude::*;
use ui::views::LandingView;

use crate::use_destination_handler;

#[component]
pub fn Home() -> Element {
    let navigate = use_destination_handler();

    rsx! {
        LandingView { on_navigate: navigate }
    }
}
