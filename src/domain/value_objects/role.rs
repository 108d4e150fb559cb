//! Role value object - the closed set of employee roles
//!
//! Roles are labels only; every role is paid with the same formula.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Developer,
    Intern,
}

impl Role {
    /// Every role, in menu order
    pub const ALL: [Role; 3] = [Role::Manager, Role::Developer, Role::Intern];

    /// Canonical spelling, used in the data file and on screen
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Developer => "Developer",
            Role::Intern => "Intern",
        }
    }

    /// `Manager/Developer/Intern`, as shown in the add prompt
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{value}' (expected one of {})", Role::choices())]
pub struct ParseRoleError {
    pub value: String,
}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseRoleError {
                value: trimmed.to_string(),
            })
    }
}
