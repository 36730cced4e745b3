//! User roles for route authorization.

use serde::{Deserialize, Serialize};

/// Closed set of user roles recognized by the platform.
///
/// Roles are carried inside signed tokens as upper-case names
/// (`"ADMIN"`, `"CLIENT"`, `"RECRUITER"`). A token carrying any other
/// role string fails deserialization and is rejected at decode time,
/// regardless of its signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Normal end user.
    Client,
    /// Recruiter account with access to candidate-facing routes.
    Recruiter,
}

impl Role {
    /// Upper-case name as carried in token claims and policy files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Client => "CLIENT",
            Role::Recruiter => "RECRUITER",
        }
    }

    /// Parse a role from its name (case-insensitive).
    ///
    /// Used when reading the role→route policy table from configuration.
    pub fn parse(s: &str) -> Option<Role> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Role::Admin),
            "CLIENT" => Some(Role::Client),
            "RECRUITER" => Some(Role::Recruiter),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
