//! User roles.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role held by a user. Exactly one role applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Works on tasks assigned to them.
    Employee,
    /// Manages projects, tasks and teams.
    Manager,
    /// Full control, including user management.
    Owner,
}

impl Role {
    /// All roles, lowest privilege first.
    pub const ALL: [Self; 3] = [Self::Employee, Self::Manager, Self::Owner];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Manager => "manager",
            Self::Owner => "owner",
        }
    }

    /// Returns `true` for roles that manage work (manager and owner).
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::Manager | Self::Owner)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "employee" => Ok(Self::Employee),
            "manager" => Ok(Self::Manager),
            "owner" => Ok(Self::Owner),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
