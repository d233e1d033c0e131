use dioxus::prelude::*;

/// A single headline number on an overview.
#[component]
pub fn StatCard(
    icon: String,
    label: String,
    value: String,
    /// Colour modifier, e.g. `green` for `stat-green`.
    tone: String,
    trend: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "stat-card stat-{tone}",
            div {
                class: "stat-header",
                div { class: "stat-icon", "{icon}" }
                if let Some(trend) = &trend {
                    span { class: "stat-trend", "{trend}" }
                }
            }
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}
