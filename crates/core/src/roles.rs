//! The two fixed user roles.

use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STARTUP: &str = "startup";

/// Which dashboard shell a user may enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Startup,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::Startup => ROLE_STARTUP,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Startup).unwrap(), "\"startup\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn unknown_and_case_variant_names_are_rejected() {
        for name in ["\"Admin\"", "\"creator\"", "\"\""] {
            assert!(serde_json::from_str::<Role>(name).is_err(), "{name}");
        }
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Startup.to_string(), "startup");
    }
}
