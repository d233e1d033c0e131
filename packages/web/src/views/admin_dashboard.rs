use dioxus::prelude::*;
use ui::views::AdminDashboardView;

use crate::use_destination_handler;

/// Organization admin dashboard route.
#[component]
pub fn AdminDashboard() -> Element {
    let navigate = use_destination_handler();

    rsx! {
        AdminDashboardView { on_navigate: navigate }
    }
}
