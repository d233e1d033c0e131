//! # API crate: placeholder backend surface for Hummingbirds
//!
//! The front end talks to a backend that has not been designed yet. This crate
//! pins down the shapes the views consume and exposes every call they make as an
//! async function, so wiring a real transport later only touches this crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Trees, activities, notifications, members, projects, profiles and stats |
//!
//! ## Calls exposed here
//!
//! - **Individual dashboard**: `fetch_user_profile`, `fetch_trees`, `fetch_activities`,
//!   `fetch_notifications`, `fetch_stats`, `update_profile`
//! - **Organization dashboard**: `fetch_org_summary`, `fetch_members`, `fetch_projects`,
//!   `add_member`, `update_org_profile`
//! - **Session**: `register`, `sign_in`, `sign_out`
//!
//! Every call resolves immediately. Reads return placeholder values or empty
//! collections; writes log what they were given and succeed. Callers still match
//! on [`ApiError`] so the log-and-continue path is in place once calls can fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod models;

pub use models::{
    Activity, Member, MemberRole, MemberStats, NewMember, Notification, OrgProfile, OrgSummary,
    Project, ProjectStatus, Tree, TreeStatus, UserProfile,
};

/// Failure of a backend call.
///
/// The placeholder calls below never fail. Both variants are reserved for the
/// transport that replaces them: `NotConfigured` when a call has no endpoint
/// wired up yet, `Request` for a failed round trip.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("no backend endpoint configured for {0}")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Request(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Credentials captured by the signup or login form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account role slug (`individual`, `organization`, `student`).
    pub role: String,
    /// Field id and raw value pairs, in form order.
    pub fields: Vec<(String, String)>,
}

impl Credentials {
    /// Field ids only, safe to log.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }
}

pub async fn fetch_user_profile() -> ApiResult<UserProfile> {
    Ok(UserProfile::placeholder())
}

pub async fn fetch_trees() -> ApiResult<Vec<Tree>> {
    Ok(Vec::new())
}

pub async fn fetch_activities() -> ApiResult<Vec<Activity>> {
    Ok(Vec::new())
}

pub async fn fetch_notifications() -> ApiResult<Vec<Notification>> {
    Ok(Vec::new())
}

pub async fn fetch_stats() -> ApiResult<MemberStats> {
    Ok(MemberStats::default())
}

pub async fn fetch_org_summary() -> ApiResult<OrgSummary> {
    Ok(OrgSummary::default())
}

pub async fn fetch_members() -> ApiResult<Vec<Member>> {
    Ok(Vec::new())
}

pub async fn fetch_projects() -> ApiResult<Vec<Project>> {
    Ok(Vec::new())
}

pub async fn update_profile(profile: UserProfile) -> ApiResult<()> {
    tracing::info!(name = %profile.name, email = %profile.email, "Profile updated");
    Ok(())
}

pub async fn update_org_profile(profile: OrgProfile) -> ApiResult<()> {
    tracing::info!(name = %profile.name, email = %profile.email, "Organization profile updated");
    Ok(())
}

pub async fn add_member(member: NewMember) -> ApiResult<()> {
    tracing::info!(
        name = %member.name,
        registration_number = %member.registration_number,
        role = %member.role,
        "Adding user"
    );
    Ok(())
}

pub async fn register(credentials: Credentials) -> ApiResult<()> {
    tracing::info!(role = %credentials.role, fields = ?credentials.field_names(), "Registering account");
    Ok(())
}

pub async fn sign_in(credentials: Credentials) -> ApiResult<()> {
    tracing::info!(role = %credentials.role, fields = ?credentials.field_names(), "Signing in");
    Ok(())
}

pub async fn sign_out() -> ApiResult<()> {
    tracing::info!("User signed out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_collections_start_empty() {
        assert!(fetch_trees().await.unwrap().is_empty());
        assert!(fetch_activities().await.unwrap().is_empty());
        assert!(fetch_notifications().await.unwrap().is_empty());
        assert!(fetch_members().await.unwrap().is_empty());
        assert!(fetch_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_placeholders() {
        let profile = fetch_user_profile().await.unwrap();
        assert_eq!(profile.name, "User Name");
        assert_eq!(profile.initials, "UN");

        let summary = fetch_org_summary().await.unwrap();
        assert_eq!(summary.name, "Organization Name");
        assert_eq!(summary.total_users, 0);

        let stats = fetch_stats().await.unwrap();
        assert_eq!(stats.rank_label(), "#-");
    }

    #[tokio::test]
    async fn test_writes_succeed_without_backend() {
        assert!(add_member(NewMember::default()).await.is_ok());
        assert!(sign_out().await.is_ok());

        let credentials = Credentials {
            role: "student".to_string(),
            fields: vec![
                ("admissionNumber".to_string(), "2025-001".to_string()),
                ("password".to_string(), "hunter22".to_string()),
            ],
        };
        assert_eq!(credentials.field_names(), vec!["admissionNumber", "password"]);
        assert!(register(credentials).await.is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::NotConfigured("trees").to_string(),
            "no backend endpoint configured for trees"
        );
        assert_eq!(
            ApiError::Request("connection reset".to_string()).to_string(),
            "request failed: connection reset"
        );
    }
}
