use api::{Member, Project};
use dioxus::prelude::*;

use super::{EmptyCard, EmptyNote, EmptyPrompt};

/// How many members the overview leaderboard shows.
const CONTRIBUTOR_LIMIT: usize = 5;

/// "Active Projects" card on the admin overview. Only active projects count.
#[component]
pub fn ActiveProjectsPanel(projects: Vec<Project>, on_create: EventHandler<()>) -> Element {
    let active: Vec<Project> = projects.into_iter().filter(Project::is_active).collect();

    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "Active Projects" }
            if active.is_empty() {
                EmptyPrompt {
                    message: "No active projects yet",
                    action_label: "Create First Project",
                    on_action: move |_| on_create.call(()),
                }
            } else {
                div {
                    class: "projects-list",
                    for project in active.iter() {
                        div {
                            key: "{project.id}",
                            class: "project-card",
                            div {
                                class: "project-header",
                                h3 { "{project.name}" }
                                span { class: "status-badge status-active", "{project.status.label()}" }
                            }
                            div {
                                class: "project-stats",
                                span { "🌳 {project.trees} trees" }
                                span { "👥 {project.members} members" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// "Top Contributors" card on the admin overview.
#[component]
pub fn TopContributorsPanel(members: Vec<Member>) -> Element {
    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "Top Contributors" }
            if members.is_empty() {
                EmptyNote { message: "No users added yet" }
            } else {
                div {
                    class: "contributors-list",
                    for member in members.iter().take(CONTRIBUTOR_LIMIT) {
                        div {
                            key: "{member.id}",
                            class: "contributor-item",
                            div {
                                class: "contributor-info",
                                div { class: "avatar-small", "{member.initial()}" }
                                div {
                                    p { class: "contributor-name", "{member.name}" }
                                    p { class: "contributor-reg", "{member.registration_number}" }
                                }
                            }
                            div {
                                class: "contributor-trees",
                                span { class: "tree-count", "{member.trees}" }
                                span { class: "tree-label", "trees" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// "Users" tab: member table with an add button.
#[component]
pub fn MembersTable(members: Vec<Member>, on_add: EventHandler<()>) -> Element {
    rsx! {
        div {
            div {
                class: "users-header",
                h2 { "Manage Users ({members.len()})" }
                button {
                    class: "btn-primary",
                    onclick: move |_| on_add.call(()),
                    "➕ Add User"
                }
            }

            if members.is_empty() {
                EmptyCard {
                    title: "No Users Yet",
                    message: "Start by adding your first user to the organization",
                    action_label: "Add First User",
                    on_action: move |_| on_add.call(()),
                }
            } else {
                div {
                    class: "users-table",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Registration No." }
                                th { "Email" }
                                th { "Phone" }
                                th { "Trees Planted" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for member in members.iter() {
                                tr {
                                    key: "{member.id}",
                                    td { "{member.name}" }
                                    td { "{member.registration_number}" }
                                    td { "{member.email}" }
                                    td { "{member.phone}" }
                                    td { "{member.trees}" }
                                    td {
                                        button { class: "btn-small btn-edit", "Edit" }
                                        button { class: "btn-small btn-view", "View" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// "Projects" tab: every project regardless of status.
#[component]
pub fn ProjectsGrid(projects: Vec<Project>, on_create: EventHandler<()>) -> Element {
    rsx! {
        div {
            div {
                class: "users-header",
                h2 { "Tree Planting Projects" }
                button {
                    class: "btn-primary",
                    onclick: move |_| on_create.call(()),
                    "➕ Create Project"
                }
            }

            if projects.is_empty() {
                EmptyCard {
                    title: "No Projects Yet",
                    message: "Create your first tree planting project",
                    action_label: "Create Project",
                    on_action: move |_| on_create.call(()),
                }
            } else {
                div {
                    class: "projects-grid",
                    for project in projects.iter() {
                        div {
                            key: "{project.id}",
                            class: "card",
                            div {
                                class: "project-header",
                                h3 { "{project.name}" }
                                span {
                                    class: "status-badge status-{project.status.slug()}",
                                    "{project.status.label()}"
                                }
                            }
                            div {
                                class: "project-details",
                                div {
                                    class: "detail-row",
                                    span { class: "detail-icon", "🌳" }
                                    span { "{project.trees} trees planted" }
                                }
                                div {
                                    class: "detail-row",
                                    span { class: "detail-icon", "👥" }
                                    span { "{project.members} members involved" }
                                }
                            }
                            button { class: "btn-view-project", "View Details" }
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
    use crate::panels::test_support::{member, project, render};
    use api::ProjectStatus;

    fn planned_only() -> Element {
        rsx! {
            ActiveProjectsPanel {
                projects: vec![project("p1", "Karura Cleanup", ProjectStatus::Planned)],
                on_create: |_| {},
            }
        }
    }

    fn one_active() -> Element {
        rsx! {
            ActiveProjectsPanel {
                projects: vec![
                    project("p1", "Karura Cleanup", ProjectStatus::Planned),
                    project("p2", "Riverbank Mukau", ProjectStatus::Active),
                ],
                on_create: |_| {},
            }
        }
    }

    fn no_contributors() -> Element {
        rsx! { TopContributorsPanel { members: vec![] } }
    }

    fn six_contributors() -> Element {
        let members = (1..=6).map(|i| member(&i.to_string(), &format!("Pupil{i}"))).collect::<Vec<_>>();
        rsx! { TopContributorsPanel { members: members } }
    }

    fn empty_table() -> Element {
        rsx! { MembersTable { members: vec![], on_add: |_| {} } }
    }

    fn filled_table() -> Element {
        rsx! {
            MembersTable {
                members: vec![member("1", "Achieng"), member("2", "Otieno")],
                on_add: |_| {},
            }
        }
    }

    fn empty_projects() -> Element {
        rsx! { ProjectsGrid { projects: vec![], on_create: |_| {} } }
    }

    fn filled_projects() -> Element {
        rsx! {
            ProjectsGrid {
                projects: vec![project("p1", "Karura Cleanup", ProjectStatus::Completed)],
                on_create: |_| {},
            }
        }
    }

    #[test]
    fn test_active_projects_ignores_inactive() {
        let html = render(planned_only);
        assert!(html.contains("No active projects yet"));
        assert!(html.contains("Create First Project"));
        assert!(!html.contains("Karura Cleanup"));
    }

    #[test]
    fn test_active_projects_lists_active() {
        let html = render(one_active);
        assert!(!html.contains("No active projects yet"));
        assert!(html.contains("Riverbank Mukau"));
        assert!(!html.contains("Karura Cleanup"));
        assert!(html.contains("120 trees"));
    }

    #[test]
    fn test_contributors_empty_and_capped() {
        assert!(render(no_contributors).contains("No users added yet"));

        let html = render(six_contributors);
        assert!(!html.contains("No users added yet"));
        assert_eq!(html.matches("contributor-item").count(), 5);
        assert!(!html.contains("Pupil6"));
    }

    #[test]
    fn test_members_table_empty_state() {
        let html = render(empty_table);
        assert!(html.contains("Manage Users (0)"));
        assert!(html.contains("No Users Yet"));
        assert!(html.contains("Add First User"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_members_table_rows() {
        let html = render(filled_table);
        assert!(html.contains("Manage Users (2)"));
        assert!(!html.contains("No Users Yet"));
        assert!(html.contains("REG-1"));
        assert!(html.contains("otieno@school.ac.ke"));
    }

    #[test]
    fn test_projects_grid_states() {
        let html = render(empty_projects);
        assert!(html.contains("No Projects Yet"));
        assert!(!html.contains("projects-grid"));

        let html = render(filled_projects);
        assert!(!html.contains("No Projects Yet"));
        assert!(html.contains("status-completed"));
        assert!(html.contains("14 members involved"));
    }
}
