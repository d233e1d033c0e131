//! Account roles a visitor picks on the signup and login screens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of account a form is being filled in for.
///
/// Nothing ties the role chosen at signup to the one chosen at login; each
/// form keeps its own selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Individual,
    Organization,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Individual, Role::Organization, Role::Student];

    pub fn slug(self) -> &'static str {
        match self {
            Role::Individual => "individual",
            Role::Organization => "organization",
            Role::Student => "student",
        }
    }

    /// Short label used by the login selector.
    pub fn label(self) -> &'static str {
        match self {
            Role::Individual => "Individual",
            Role::Organization => "Organization",
            Role::Student => "Student",
        }
    }

    /// Descriptive label used by the signup selector.
    pub fn signup_label(self) -> &'static str {
        match self {
            Role::Individual => "Individual (Student/Parent)",
            Role::Organization => "Organization (Teacher/School)",
            Role::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.slug() == s)
            .ok_or_else(|| format!("Unknown role: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_slug_round_trips_through_from_str() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_default_role_is_individual() {
        assert_eq!(Role::default(), Role::Individual);
    }
}
