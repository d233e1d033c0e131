//! Route-independent navigation targets.
//!
//! Views report where they want to go as a [`Destination`]; the launcher crate
//! maps each destination onto its router. Keeping the branching here means the
//! role-to-page rules are plain functions with no router in scope.

use crate::session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Signup,
    Login,
    Dashboard,
    AdminDashboard,
}

impl Destination {
    pub const ALL: [Destination; 5] = [
        Destination::Home,
        Destination::Signup,
        Destination::Login,
        Destination::Dashboard,
        Destination::AdminDashboard,
    ];

    /// URL path of the page. The admin path keeps its historical casing.
    pub fn path(self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Signup => "/signup",
            Destination::Login => "/login",
            Destination::Dashboard => "/dashboard",
            Destination::AdminDashboard => "/AdminDashboard",
        }
    }

    /// Exact path lookup. Unknown paths have no page.
    pub fn from_path(path: &str) -> Option<Self> {
        Destination::ALL.into_iter().find(|d| d.path() == path)
    }
}

/// Where a completed signup lands.
pub fn destination_after_signup(role: Role) -> Destination {
    match role {
        Role::Organization => Destination::AdminDashboard,
        Role::Individual | Role::Student => Destination::Dashboard,
    }
}

/// Login submission does not navigate anywhere yet.
pub fn destination_after_login(_role: Role) -> Option<Destination> {
    None
}

pub fn destination_after_sign_out() -> Destination {
    Destination::Home
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_routes_organization_to_admin_dashboard() {
        assert_eq!(
            destination_after_signup(Role::Organization).path(),
            "/AdminDashboard"
        );
    }

    #[test]
    fn test_signup_routes_other_roles_to_dashboard() {
        assert_eq!(destination_after_signup(Role::Individual).path(), "/dashboard");
        assert_eq!(destination_after_signup(Role::Student).path(), "/dashboard");
    }

    #[test]
    fn test_login_has_no_destination() {
        for role in Role::ALL {
            assert_eq!(destination_after_login(role), None);
        }
    }

    #[test]
    fn test_from_path_is_exact() {
        for destination in Destination::ALL {
            assert_eq!(Destination::from_path(destination.path()), Some(destination));
        }
        assert_eq!(Destination::from_path("/admin-dashboard"), None);
        assert_eq!(Destination::from_path("/Dashboard"), None);
        assert_eq!(Destination::from_path("/nowhere"), None);
    }

    #[test]
    fn test_sign_out_goes_home() {
        assert_eq!(destination_after_sign_out(), Destination::Home);
    }
}
