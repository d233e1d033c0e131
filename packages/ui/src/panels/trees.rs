use api::Tree;
use dioxus::prelude::*;

use super::{EmptyCard, EmptyPrompt};

/// How many passports the overview card previews.
const RECENT_LIMIT: usize = 2;

/// "My Recent Trees" card on the individual overview.
#[component]
pub fn RecentTreesPanel(
    trees: Vec<Tree>,
    on_register: EventHandler<()>,
    on_view_all: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "My Recent Trees" }
            if trees.is_empty() {
                EmptyPrompt {
                    message: "No trees registered yet",
                    action_label: "Register Your First Tree",
                    on_action: move |_| on_register.call(()),
                }
            } else {
                div {
                    class: "trees-grid",
                    for tree in trees.iter().take(RECENT_LIMIT).cloned() {
                        TreePassport { key: "{tree.id}", tree: tree }
                    }
                }
                button {
                    class: "btn-view-all",
                    onclick: move |_| on_view_all.call(()),
                    "View All My Trees ({trees.len()})"
                }
            }
        }
    }
}

/// "My Trees" tab: search box plus every passport that matches it.
#[component]
pub fn TreeGrid(
    trees: Vec<Tree>,
    on_register: EventHandler<()>,
    /// Search text the box starts with.
    #[props(default)]
    initial_query: String,
) -> Element {
    let mut query = use_signal(|| initial_query.clone());

    rsx! {
        div {
            div {
                class: "search-section",
                input {
                    r#type: "text",
                    class: "search-input",
                    placeholder: "Search by Tree ID, species, or location...",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                button { class: "btn-filter", "Filter" }
            }

            if trees.is_empty() {
                EmptyCard {
                    title: "No Trees Yet",
                    message: "Start your journey by registering your first tree!",
                    action_label: "Register Tree",
                    on_action: move |_| on_register.call(()),
                }
            } else {
                div {
                    class: "trees-grid-full",
                    for tree in trees.iter().filter(|t| t.matches(&query.read())).cloned() {
                        TreePassport { key: "{tree.id}", tree: tree }
                    }
                }
            }
        }
    }
}

/// One tree's passport card.
#[component]
pub fn TreePassport(tree: Tree) -> Element {
    rsx! {
        div {
            class: "tree-passport",
            div {
                class: "passport-header",
                div {
                    p { class: "tree-id-label", "Tree ID" }
                    p { class: "tree-id", "{tree.id}" }
                }
                span {
                    class: "status-badge status-{tree.status.slug()}",
                    "{tree.status}"
                }
            }
            if let Some(ref src) = tree.image_url {
                img { class: "tree-image", src: "{src}", alt: "{tree.species}" }
            }
            div {
                class: "tree-details",
                div {
                    class: "detail-row",
                    span { class: "detail-icon", "🌳" }
                    span { class: "detail-text", "{tree.species}" }
                }
                div {
                    class: "detail-row",
                    span { class: "detail-icon", "📍" }
                    span { class: "detail-text", "{tree.location}" }
                }
                p { class: "planted-date", "Planted: {tree.date_planted}" }
            }
            button { class: "btn-passport", "View Full Passport" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::test_support::{render, tree};

    fn empty_recent() -> Element {
        rsx! {
            RecentTreesPanel { trees: vec![], on_register: |_| {}, on_view_all: |_| {} }
        }
    }

    fn three_recent() -> Element {
        rsx! {
            RecentTreesPanel {
                trees: vec![
                    tree("HB-1", "Melia volkensii (Mukau)", "Karura Forest"),
                    tree("HB-2", "Grevillea robusta (Silky Oak)", "Ngong Road Forest"),
                    tree("HB-3", "Acacia species", "Kakamega"),
                ],
                on_register: |_| {},
                on_view_all: |_| {},
            }
        }
    }

    fn empty_grid() -> Element {
        rsx! { TreeGrid { trees: vec![], on_register: |_| {} } }
    }

    fn filled_grid() -> Element {
        rsx! {
            TreeGrid {
                trees: vec![
                    tree("HB-1", "Melia volkensii (Mukau)", "Karura Forest"),
                    tree("HB-2", "Grevillea robusta (Silky Oak)", "Ngong Road Forest"),
                ],
                on_register: |_| {},
            }
        }
    }

    fn searched_grid() -> Element {
        rsx! {
            TreeGrid {
                trees: vec![
                    tree("HB-1", "Melia volkensii (Mukau)", "Karura Forest"),
                    tree("HB-2", "Grevillea robusta (Silky Oak)", "Ngong Road Forest"),
                    tree("HB-3", "Acacia species", "Kakamega"),
                ],
                on_register: |_| {},
                initial_query: "KARURA",
            }
        }
    }

    fn unmatched_search() -> Element {
        rsx! {
            TreeGrid {
                trees: vec![tree("HB-1", "Melia volkensii (Mukau)", "Karura Forest")],
                on_register: |_| {},
                initial_query: "baobab",
            }
        }
    }

    #[test]
    fn test_recent_trees_empty_state() {
        let html = render(empty_recent);
        assert!(html.contains("No trees registered yet"));
        assert!(html.contains("Register Your First Tree"));
        assert!(!html.contains("trees-grid"));
    }

    #[test]
    fn test_recent_trees_previews_two() {
        let html = render(three_recent);
        assert!(!html.contains("No trees registered yet"));
        assert_eq!(html.matches("tree-passport").count(), 2);
        assert!(html.contains("HB-1"));
        assert!(!html.contains("HB-3"));
        assert!(html.contains("View All My Trees (3)"));
    }

    #[test]
    fn test_tree_grid_empty_state() {
        let html = render(empty_grid);
        assert!(html.contains("No Trees Yet"));
        assert!(html.contains("Start your journey by registering your first tree!"));
        assert!(!html.contains("trees-grid-full"));
    }

    #[test]
    fn test_tree_grid_lists_every_tree() {
        let html = render(filled_grid);
        assert!(!html.contains("No Trees Yet"));
        assert_eq!(html.matches("tree-passport").count(), 2);
        assert!(html.contains("Ngong Road Forest"));
        assert!(html.contains("status-healthy"));
    }

    #[test]
    fn test_tree_grid_search_keeps_only_matches() {
        let html = render(searched_grid);
        assert_eq!(html.matches("tree-passport").count(), 1);
        assert!(html.contains("Karura Forest"));
        assert!(!html.contains("Ngong Road Forest"));
        assert!(!html.contains("Kakamega"));
    }

    #[test]
    fn test_tree_grid_search_without_matches_is_not_the_empty_state() {
        let html = render(unmatched_search);
        assert_eq!(html.matches("tree-passport").count(), 0);
        assert!(html.contains("trees-grid-full"));
        assert!(!html.contains("No Trees Yet"));
    }
}
