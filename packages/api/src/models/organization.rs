//! Organization-side records: enrolled members and planting projects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role an organization admin assigns when enrolling someone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    #[default]
    Student,
    Staff,
    Member,
}

impl MemberRole {
    pub const ALL: [MemberRole; 3] = [MemberRole::Student, MemberRole::Staff, MemberRole::Member];

    pub fn slug(self) -> &'static str {
        match self {
            MemberRole::Student => "student",
            MemberRole::Staff => "staff",
            MemberRole::Member => "member",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MemberRole::Student => "Student",
            MemberRole::Staff => "Staff",
            MemberRole::Member => "Member",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberRole::ALL
            .into_iter()
            .find(|role| role.slug() == s)
            .ok_or_else(|| format!("Unknown member role: {s}"))
    }
}

/// A person enrolled under an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub registration_number: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub trees: u32,
}

impl Member {
    /// First character of the name, used for the small avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

/// Payload of the "Add New User" modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_number: String,
    pub role: MemberRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Planned,
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Planned => "Planned",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Planned => "planned",
            ProjectStatus::Completed => "completed",
        }
    }
}

/// A tree planting project run by an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub trees: u32,
    pub members: u32,
}

impl Project {
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

/// Headline numbers for the admin overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgSummary {
    pub name: String,
    pub total_users: u32,
    pub total_trees: u32,
    pub survival_rate: u32,
    pub active_projects: u32,
}

impl Default for OrgSummary {
    fn default() -> Self {
        Self {
            name: "Organization Name".to_string(),
            total_users: 0,
            total_trees: 0,
            survival_rate: 0,
            active_projects: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_role_parses_slug() {
        assert_eq!("staff".parse::<MemberRole>(), Ok(MemberRole::Staff));
        assert!("admin".parse::<MemberRole>().is_err());
        assert_eq!(NewMember::default().role, MemberRole::Student);
    }

    #[test]
    fn test_member_initial() {
        let member = Member {
            id: "1".to_string(),
            name: "wanjiru".to_string(),
            registration_number: "2025-001".to_string(),
            email: String::new(),
            phone: String::new(),
            trees: 0,
        };
        assert_eq!(member.initial(), "W");
    }
}
