use api::Activity;
use dioxus::prelude::*;

use super::EmptyNote;

/// "Recent Activity" side card, shared by both dashboards.
#[component]
pub fn ActivityFeed(activities: Vec<Activity>) -> Element {
    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "Recent Activity" }
            if activities.is_empty() {
                EmptyNote { message: "No recent activity" }
            } else {
                div {
                    class: "activities",
                    for (idx, activity) in activities.iter().enumerate() {
                        div {
                            key: "{idx}",
                            class: "activity-item",
                            div { class: "activity-icon", "✓" }
                            div {
                                class: "activity-content",
                                p { class: "activity-action", "{activity.action}" }
                                if let Some(ref tree) = activity.tree {
                                    p { class: "activity-tree", "{tree}" }
                                }
                                p { class: "activity-time", "{activity.time}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::test_support::render;

    fn empty_feed() -> Element {
        rsx! { ActivityFeed { activities: vec![] } }
    }

    fn one_activity() -> Element {
        rsx! {
            ActivityFeed {
                activities: vec![Activity {
                    action: "Uploaded a growth photo".to_string(),
                    tree: Some("HB-1".to_string()),
                    time: "2 hours ago".to_string(),
                }],
            }
        }
    }

    #[test]
    fn test_empty_feed_shows_note() {
        let html = render(empty_feed);
        assert!(html.contains("No recent activity"));
        assert!(!html.contains("activity-item"));
    }

    #[test]
    fn test_feed_lists_activities() {
        let html = render(one_activity);
        assert!(!html.contains("No recent activity"));
        assert!(html.contains("Uploaded a growth photo"));
        assert!(html.contains("activity-tree"));
        assert!(html.contains("2 hours ago"));
    }
}
