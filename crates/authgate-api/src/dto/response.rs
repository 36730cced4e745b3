//! Response DTOs.
//!
//! Field casing differs between endpoints on purpose: the login body is
//! camelCase while the refresh body is snake_case, matching the wire
//! contract existing clients already depend on.

use serde::{Deserialize, Serialize};

use authgate_core::types::Role;

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Role at issuance.
    pub role: Role,
    /// Account email.
    pub email: String,
    /// Numeric account id.
    pub id: i64,
}

/// Refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Rotated access token.
    pub access_token: String,
    /// Rotated refresh token.
    pub refresh_token: String,
    /// The account's identification number.
    pub user_id: String,
}

/// Identity echo for `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Account email.
    pub email: String,
    /// Role carried in the presented token.
    pub role: Role,
    /// Role in authority form (`ROLE_<NAME>`).
    pub authority: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process can respond at all.
    pub status: String,
    /// Crate version.
    pub version: String,
}
