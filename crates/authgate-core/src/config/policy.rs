//! Role→route access policy configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Declarative role→route access table.
///
/// Keys are role names (`ADMIN`, `CLIENT`, …), values are lists of path
/// templates using `*` (single segment remainder, non-slash) and `**`
/// (any suffix including slashes). Compiled once at startup by the route
/// authorization engine; a role missing from the table is denied
/// everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Route patterns granted per role.
    #[serde(default)]
    pub access: HashMap<String, Vec<String>>,
}
