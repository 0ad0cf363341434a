//! Portal user roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Role attached to a portal user.
///
/// Managers and department heads can review suggestions and manage
/// content; regular users read content and submit suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User,
    Manager,
    DepartmentHead,
}

impl UserRole {
    /// String form used in storage and token claims
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Manager => "manager",
            Self::DepartmentHead => "department_head",
        }
    }

    /// Whether this role can manage portal content and review suggestions
    #[must_use]
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Manager | Self::DepartmentHead)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "manager" => Ok(Self::Manager),
            "department_head" => Ok(Self::DepartmentHead),
            other => Err(DomainError::ValidationError(format!(
                "Unknown role: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for role in [UserRole::User, UserRole::Manager, UserRole::DepartmentHead] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_is_staff() {
        assert!(!UserRole::User.is_staff());
        assert!(UserRole::Manager.is_staff());
        assert!(UserRole::DepartmentHead.is_staff());
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("admin".parse::<UserRole>().is_err());
    }
}
