//! Dashboard header: branding, home link, notification bell and user menu.

use api::Notification;
use dioxus::prelude::*;

use crate::overlay::Overlay;
use crate::panels::NotificationDropdown;

/// Who the header shows in the avatar block.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderIdentity {
    pub initials: String,
    pub name: String,
    pub role: String,
}

/// Shared header for both dashboards.
///
/// The header never owns overlay state; it reports the next [`Overlay`] value
/// through `on_overlay` and renders whatever it is given.
#[component]
pub fn DashboardHeader(
    icon: String,
    title: String,
    subtitle: String,
    identity: HeaderIdentity,
    notifications: Vec<Notification>,
    overlay: Overlay,
    on_overlay: EventHandler<Overlay>,
    on_home: EventHandler<()>,
    on_sign_out: EventHandler<()>,
) -> Element {
    let unread = notifications.len();

    rsx! {
        header {
            class: "dashboard-header",
            div {
                class: "header-content",
                div {
                    class: "header-left",
                    div {
                        class: "logo-section",
                        span { class: "tree-icon", "{icon}" }
                        div {
                            h1 { "{title}" }
                            p { class: "subtitle", "{subtitle}" }
                        }
                    }
                }

                div {
                    class: "header-right",
                    button {
                        class: "home-button",
                        onclick: move |_| on_home.call(()),
                        "🏠 Home"
                    }

                    div {
                        class: "notification-wrapper",
                        div {
                            class: "notification-bell",
                            onclick: move |_| on_overlay.call(overlay.toggle_notifications()),
                            "🔔"
                            if unread > 0 {
                                span { class: "notification-badge", "{unread}" }
                            }
                        }
                        if overlay == Overlay::Notifications {
                            NotificationDropdown { notifications: notifications.clone() }
                        }
                    }

                    div {
                        class: "user-dropdown-wrapper",
                        div {
                            class: "user-profile",
                            onclick: move |_| on_overlay.call(overlay.toggle_user_menu()),
                            div { class: "avatar", "{identity.initials}" }
                            div {
                                class: "user-info",
                                p { class: "user-name", "{identity.name}" }
                                p { class: "user-role", "{identity.role}" }
                            }
                            span { class: "dropdown-arrow", "▼" }
                        }
                        if overlay == Overlay::UserMenu {
                            div {
                                class: "user-dropdown-menu",
                                button {
                                    class: "dropdown-menu-item",
                                    onclick: move |_| on_overlay.call(overlay.edit_profile()),
                                    span { class: "menu-icon", "👤" }
                                    "User Profile"
                                }
                                button {
                                    class: "dropdown-menu-item signout-item",
                                    onclick: move |_| on_sign_out.call(()),
                                    span { class: "menu-icon", "🚪" }
                                    "Sign Out"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
