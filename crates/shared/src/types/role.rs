//! User roles supplied by the authorization collaborator.
//!
//! The engine trusts the role it is handed; deciding who holds which role
//! is out of scope here.

use serde::{Deserialize, Serialize};

/// Role of an acting user.
///
/// Roles are ordered from lowest to highest privilege.
/// Higher roles can perform all actions of lower roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular employee: owns their requests.
    Employee = 0,
    /// Human resources: decides leave and CET transfer requests.
    Rh = 1,
    /// Direction: everything RH can do.
    Direction = 2,
}

impl Role {
    /// Parse a role from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "employee" => Some(Self::Employee),
            "rh" => Some(Self::Rh),
            "direction" => Some(Self::Direction),
            _ => None,
        }
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Rh => "rh",
            Self::Direction => "direction",
        }
    }

    /// Returns true if the role may decide requests (RH transitions).
    #[must_use]
    pub fn can_decide(&self) -> bool {
        *self >= Self::Rh
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("employee"), Some(Role::Employee));
        assert_eq!(Role::parse("RH"), Some(Role::Rh));
        assert_eq!(Role::parse("Direction"), Some(Role::Direction));
        assert_eq!(Role::parse("invalid"), None);
    }

    #[test]
    fn test_role_ordering() {
        assert!(Role::Employee < Role::Rh);
        assert!(Role::Rh < Role::Direction);
    }

    #[test]
    fn test_role_can_decide() {
        assert!(!Role::Employee.can_decide());
        assert!(Role::Rh.can_decide());
        assert!(Role::Direction.can_decide());
    }
}
