//! Data models for the application.

mod organization;
mod profile;
mod tree;

pub use organization::{Member, MemberRole, NewMember, OrgSummary, Project, ProjectStatus};
pub use profile::{MemberStats, OrgProfile, UserProfile};
pub use tree::{Activity, Notification, Tree, TreeStatus};
