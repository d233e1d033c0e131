use dioxus::prelude::*;
use ui::views::MemberDashboardView;

use crate::use_destination_handler;

/// Individual dashboard route.
#[component]
pub fn Dashboard() -> Element {
    let navigate = use_destination_handler();

    rsx! {
        MemberDashboardView { on_navigate: navigate }
    }
}
