//! # Branding configuration (`branding.toml`)
//!
//! Product copy that differs between deployments lives in a small TOML file
//! embedded at build time. Every key has a default, so a partial file only
//! overrides what it names.
//!
//! ```toml
//! [landing]
//! name = "Hummingbirds"
//! impact = "Join 50+ schools already making a difference!"
//!
//! [dashboard]
//! title = "EcoTrack Kenya"
//! programme = "15 Billion Tree Programme"
//! ```

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

const EMBEDDED: &str = include_str!("../branding.toml");

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingConfig {
    #[serde(default)]
    pub landing: LandingCopy,
    #[serde(default)]
    pub dashboard: DashboardCopy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingCopy {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub impact: String,
}

impl Default for LandingCopy {
    fn default() -> Self {
        Self {
            name: "Hummingbirds".to_string(),
            headline: "Lets Grow a Greener Future, One Tree at a Time.".to_string(),
            tagline: "Hummingbirds is a platform to plant, track and earn rewards for real-world environmental action.".to_string(),
            impact: "Join 50+ schools already making a difference!".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardCopy {
    pub title: String,
    pub programme: String,
}

impl Default for DashboardCopy {
    fn default() -> Self {
        Self {
            title: "EcoTrack Kenya".to_string(),
            programme: "15 Billion Tree Programme".to_string(),
        }
    }
}

impl BrandingConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// The embedded `branding.toml`, or defaults if it fails to parse.
    pub fn embedded() -> Self {
        Self::from_toml(EMBEDDED).unwrap_or_else(|e| {
            tracing::warn!("Invalid branding.toml, using defaults: {}", e);
            Self::default()
        })
    }
}

/// Branding from context, falling back to the embedded file.
pub fn use_branding() -> BrandingConfig {
    try_use_context::<BrandingConfig>().unwrap_or_else(BrandingConfig::embedded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_file_matches_defaults() {
        assert_eq!(BrandingConfig::embedded(), BrandingConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = BrandingConfig::from_toml("[dashboard]\ntitle = \"Green Schools\"\n").unwrap();
        assert_eq!(config.dashboard.title, "Green Schools");
        assert_eq!(config.dashboard.programme, "15 Billion Tree Programme");
        assert_eq!(config.landing, LandingCopy::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(BrandingConfig::from_toml("").unwrap(), BrandingConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(BrandingConfig::from_toml("[landing\nname = 1").is_err());
    }
}
