//! Role to route-pattern authorization.

use std::collections::HashMap;

use tracing::debug;

use authgate_core::config::policy::PolicyConfig;
use authgate_core::error::AppError;
use authgate_core::types::Role;

use super::pattern::RoutePattern;

/// Decides whether a role may reach a path.
///
/// Policy is deny-by-default: a path is allowed only if at least one of
/// the role's compiled patterns matches it. Built once at startup and
/// shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct RouteAuthorizer {
    access: HashMap<Role, Vec<RoutePattern>>,
}

impl RouteAuthorizer {
    /// Compiles the configured policy table.
    ///
    /// Fails fast on an unknown role name or an invalid pattern so a
    /// typo in configuration cannot silently widen or narrow access.
    pub fn from_config(config: &PolicyConfig) -> Result<Self, AppError> {
        let mut access = HashMap::new();

        for (role_name, patterns) in &config.access {
            let role = Role::parse(role_name).ok_or_else(|| {
                AppError::configuration(format!("unknown role in policy: {role_name:?}"))
            })?;

            let mut compiled = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                compiled.push(RoutePattern::compile(pattern)?);
            }

            access.insert(role, compiled);
        }

        Ok(Self { access })
    }

    /// Whether `role` may access `path`.
    pub fn decide(&self, role: Role, path: &str) -> bool {
        let Some(patterns) = self.access.get(&role) else {
            debug!(%role, path, "no policy entry for role, denying");
            return false;
        };

        patterns.iter().any(|p| p.matches(path))
    }

    /// The configured patterns for a role, if any.
    pub fn patterns_for(&self, role: Role) -> Option<&[RoutePattern]> {
        self.access.get(&role).map(Vec::as_slice)
    }
}
