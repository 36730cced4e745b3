//! The authenticated identity attached to a forwarded request.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Verified identity extracted from a valid access token.
///
/// Created once per request after signature and expiry checks pass;
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Subject of the token: the user's email address.
    pub subject: String,
    /// Role at the time the token was issued.
    pub role: Role,
}

impl Principal {
    /// Create a principal from a subject and role.
    pub fn new(subject: impl Into<String>, role: Role) -> Self {
        Self {
            subject: subject.into(),
            role,
        }
    }

    /// Granted authority string in the `ROLE_<NAME>` convention consumed
    /// by downstream authorization checks.
    pub fn authority(&self) -> String {
        format!("ROLE_{}", self.role.as_str())
    }
}
