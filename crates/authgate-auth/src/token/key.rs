//! Process-wide symmetric signing key.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use jsonwebtoken::{DecodingKey, EncodingKey};

use authgate_core::config::auth::AuthConfig;
use authgate_core::error::AppError;

/// Symmetric HMAC-SHA256 key material, decoded from configuration once
/// at startup and shared read-only for the process lifetime.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Decode the base64 secret from configuration into key material.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        let secret = BASE64
            .decode(&config.jwt_secret)
            .map_err(|e| AppError::configuration(format!("jwt_secret is not valid base64: {e}")))?;

        if secret.is_empty() {
            return Err(AppError::configuration("jwt_secret must not be empty"));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(&secret),
            decoding: DecodingKey::from_secret(&secret),
        })
    }

    /// Key handle for signing.
    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    /// Key handle for verification.
    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}
