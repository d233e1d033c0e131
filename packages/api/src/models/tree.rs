//! # Tree tracking records
//!
//! [`Tree`] is one registered planting as shown on a tree passport card.
//! [`Activity`] and [`Notification`] feed the side panels and the header bell.
//! None of these carry a server-assigned identity yet; `Tree::id` is the
//! human-readable passport code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Growth status shown as a badge on a tree passport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeStatus {
    #[default]
    Healthy,
    Growing,
    AtRisk,
    Dead,
}

impl TreeStatus {
    pub fn label(self) -> &'static str {
        match self {
            TreeStatus::Healthy => "Healthy",
            TreeStatus::Growing => "Growing",
            TreeStatus::AtRisk => "At Risk",
            TreeStatus::Dead => "Dead",
        }
    }

    /// CSS modifier used for the status badge (`status-<slug>`).
    pub fn slug(self) -> &'static str {
        match self {
            TreeStatus::Healthy => "healthy",
            TreeStatus::Growing => "growing",
            TreeStatus::AtRisk => "at-risk",
            TreeStatus::Dead => "dead",
        }
    }
}

impl fmt::Display for TreeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A registered tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub id: String,
    pub species: String,
    pub location: String,
    pub date_planted: String,
    pub status: TreeStatus,
    pub image_url: Option<String>,
}

impl Tree {
    /// Case-insensitive match against id, species or location.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.id, &self.species, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// An entry in a "Recent Activity" feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub action: String,
    pub tree: Option<String>,
    pub time: String,
}

/// A header notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub time: String,
    #[serde(default)]
    pub urgent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mukau() -> Tree {
        Tree {
            id: "HB-0042".to_string(),
            species: "Melia volkensii (Mukau)".to_string(),
            location: "Karura Forest".to_string(),
            date_planted: "2025-03-01".to_string(),
            status: TreeStatus::Growing,
            image_url: None,
        }
    }

    #[test]
    fn test_tree_matches_any_searchable_field() {
        let tree = mukau();
        assert!(tree.matches("hb-00"));
        assert!(tree.matches("MUKAU"));
        assert!(tree.matches("karura"));
        assert!(!tree.matches("grevillea"));
    }

    #[test]
    fn test_blank_query_matches_everything() {
        assert!(mukau().matches("   "));
    }

    #[test]
    fn test_status_slug_is_css_safe() {
        assert_eq!(TreeStatus::AtRisk.slug(), "at-risk");
        assert_eq!(TreeStatus::AtRisk.to_string(), "At Risk");
    }
}
