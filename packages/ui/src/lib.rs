//! This crate contains all shared UI for the workspace: the session and
//! navigation model, the role-driven auth forms, dashboard state machines and
//! the page views the launcher mounts on its routes.

pub mod config;
pub use config::{use_branding, BrandingConfig};

pub mod session;
pub use session::Role;

pub mod navigation;
pub use navigation::{
    destination_after_login, destination_after_sign_out, destination_after_signup, Destination,
};

pub mod forms;
pub use forms::{FieldId, FieldSpec, LoginForm, RoleForm, SignupForm, Submission};

pub mod overlay;
pub use overlay::Overlay;

pub mod tabs;
pub use tabs::{AdminTab, DashboardState, DashboardTab, MemberTab};

pub mod panels;

mod auth_form;

mod header;
pub use header::{DashboardHeader, HeaderIdentity};

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::{FeatureSection, Hero, HowItWorks};

pub mod views;
