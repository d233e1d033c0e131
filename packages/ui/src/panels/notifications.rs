use api::Notification;
use dioxus::prelude::*;

/// Dropdown listing header notifications.
#[component]
pub fn NotificationDropdown(notifications: Vec<Notification>) -> Element {
    rsx! {
        div {
            class: "notification-dropdown",
            h3 { "Notifications" }
            if notifications.is_empty() {
                p { class: "no-notifications", "No new notifications" }
            } else {
                div {
                    class: "notification-list",
                    for (idx, notif) in notifications.iter().enumerate() {
                        div {
                            key: "{idx}",
                            class: if notif.urgent { "notification-item urgent" } else { "notification-item" },
                            p { "{notif.message}" }
                            span { class: "notification-time", "{notif.time}" }
                        }
                    }
                }
            }
        }
    }
}
