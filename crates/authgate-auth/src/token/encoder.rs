//! Token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, Header, encode};

use authgate_core::config::auth::AuthConfig;
use authgate_core::error::AppError;
use authgate_core::types::Principal;

use super::claims::Claims;
use super::key::SigningKey;

/// Creates signed access and refresh tokens.
#[derive(Clone)]
pub struct TokenEncoder {
    key: SigningKey,
    access_ttl_minutes: i64,
    refresh_ttl_hours: i64,
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration and the process key.
    pub fn new(config: &AuthConfig, key: &SigningKey) -> Self {
        Self {
            key: key.clone(),
            access_ttl_minutes: config.access_ttl_minutes as i64,
            refresh_ttl_hours: config.refresh_ttl_hours as i64,
        }
    }

    /// Builds a single signed token for the principal with the given TTL.
    ///
    /// Pure apart from reading the clock: identical inputs at the same
    /// second produce identical tokens.
    pub fn build(
        &self,
        principal: &Principal,
        ttl: Duration,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = Claims {
            sub: principal.subject.clone(),
            role: principal.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            self.key.encoding(),
        )
        .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok((token, expires_at))
    }

    /// Generates a new access + refresh token pair from the same
    /// principal snapshot.
    pub fn issue_pair(&self, principal: &Principal) -> Result<TokenPair, AppError> {
        let (access_token, access_expires_at) =
            self.build(principal, Duration::minutes(self.access_ttl_minutes))?;
        let (refresh_token, refresh_expires_at) =
            self.build(principal, Duration::hours(self.refresh_ttl_hours))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish_non_exhaustive()
    }
}
