//! External user-management service configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the user-management REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserApiConfig {
    /// Base URL of the user service, e.g. `http://users:8081/api`.
    pub base_url: String,
    /// Per-request timeout in seconds for lookups and credential checks.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    5
}
