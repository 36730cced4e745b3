//! Token signing and lifetime configuration.

use serde::{Deserialize, Serialize};

/// Signing key material and token lifetimes.
///
/// The secret is stored base64-encoded in configuration and decoded once
/// at startup into the process-wide signing key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base64-encoded HMAC-SHA256 signing secret.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_hours: u64,
}

fn default_jwt_secret() -> String {
    // base64 of a placeholder secret; must be overridden in production.
    "Q0hBTkdFX01FX0lOX1BST0RVQ1RJT05fMzJfQllURVM=".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    24
}
