use serde::{Deserialize, Serialize};

/// Header identity for the individual dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub initials: String,
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl UserProfile {
    /// Placeholder identity shown until a real profile endpoint exists.
    pub fn placeholder() -> Self {
        Self {
            name: "User Name".to_string(),
            initials: "UN".to_string(),
            role: "Student".to_string(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

/// Contact details edited from the admin profile modal and settings tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Stat cards on the individual overview.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberStats {
    pub total_trees: u32,
    pub monthly_increase: u32,
    pub survival_rate: u32,
    pub badges: u32,
    pub rank: u32,
}

impl MemberStats {
    /// Rank renders as `#-` until one has been assigned.
    pub fn rank_label(&self) -> String {
        if self.rank == 0 {
            "#-".to_string()
        } else {
            format!("#{}", self.rank)
        }
    }
}
