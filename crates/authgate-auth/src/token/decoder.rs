//! Token validation.

use jsonwebtoken::{Algorithm, Validation, decode};

use crate::error::TokenError;

use super::claims::Claims;
use super::key::SigningKey;

/// Verifies token signatures and expiry.
///
/// Pure function of the token string, the process key, and the current
/// time; safe to share across concurrent requests.
#[derive(Clone)]
pub struct TokenDecoder {
    key: SigningKey,
    validation: Validation,
}

impl TokenDecoder {
    /// Creates a new decoder bound to the process key.
    ///
    /// The algorithm is pinned to HS256: a token whose header names any
    /// other algorithm is rejected as malformed rather than verified
    /// under the attacker-chosen scheme. Expiry is enforced with zero
    /// leeway; token lifetimes are long enough that clock skew is
    /// handled by TTL headroom, not by loosening the check.
    pub fn new(key: &SigningKey) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            key: key.clone(),
            validation,
        }
    }

    /// Verifies the signature and expiry of a token and returns its claims.
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, self.key.decoding(), &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                // Wrong algorithm, bad base64, unknown role, missing
                // claims: all unusable regardless of the signature.
                _ => TokenError::Malformed,
            }
        })?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}
