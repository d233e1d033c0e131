//! Collection-backed dashboard panels.
//!
//! Every panel takes its collection as a prop and picks between two renders:
//! a fixed empty state (message, optionally a call to action) when the
//! collection is empty, and itemised content otherwise.

mod empty_state;
pub use empty_state::{EmptyCard, EmptyNote, EmptyPrompt};

mod trees;
pub use trees::{RecentTreesPanel, TreeGrid, TreePassport};

mod activity;
pub use activity::ActivityFeed;

mod notifications;
pub use notifications::NotificationDropdown;

mod organization;
pub use organization::{ActiveProjectsPanel, MembersTable, ProjectsGrid, TopContributorsPanel};

mod stats;
pub use stats::StatCard;

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use dioxus::prelude::*;

    /// Render a root component to HTML.
    pub fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Render after the tasks spawned on mount have run and their writes
    /// have been applied.
    pub async fn render_loaded(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        while tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
            .await
            .is_ok()
        {
            dom.render_immediate_to_vec();
        }
        dioxus_ssr::render(&dom)
    }

    pub fn tree(id: &str, species: &str, location: &str) -> api::Tree {
        api::Tree {
            id: id.to_string(),
            species: species.to_string(),
            location: location.to_string(),
            date_planted: "2025-04-22".to_string(),
            status: api::TreeStatus::Healthy,
            image_url: None,
        }
    }

    pub fn member(id: &str, name: &str) -> api::Member {
        api::Member {
            id: id.to_string(),
            name: name.to_string(),
            registration_number: format!("REG-{id}"),
            email: format!("{}@school.ac.ke", name.to_lowercase()),
            phone: "+254712345678".to_string(),
            trees: 3,
        }
    }

    pub fn project(id: &str, name: &str, status: api::ProjectStatus) -> api::Project {
        api::Project {
            id: id.to_string(),
            name: name.to_string(),
            status,
            trees: 120,
            members: 14,
        }
    }
}
