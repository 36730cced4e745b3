//! Login and refresh token lifecycle.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use authgate_core::config::auth::AuthConfig;
use authgate_core::config::user_api::UserApiConfig;
use authgate_core::AppResult;
use authgate_core::traits::UserLookup;
use authgate_core::types::{Principal, UserRecord};

use crate::error::{RefreshError, TokenError};

use super::decoder::TokenDecoder;
use super::encoder::{TokenEncoder, TokenPair};
use super::key::SigningKey;

/// Coordinates token issuance, validation, and refresh rotation.
///
/// Issuance and validation are local operations against the process
/// key; refresh additionally consults the user directory so that role
/// changes take effect on the next rotation.
pub struct TokenService {
    encoder: TokenEncoder,
    decoder: TokenDecoder,
    lookup: Arc<dyn UserLookup>,
    lookup_timeout: Duration,
}

/// Outcome of a successful refresh: a freshly minted pair plus the
/// directory record it was minted from.
#[derive(Debug, Clone)]
pub struct RefreshGrant {
    pub tokens: TokenPair,
    pub user: UserRecord,
}

impl TokenService {
    pub fn new(
        auth: &AuthConfig,
        user_api: &UserApiConfig,
        key: &SigningKey,
        lookup: Arc<dyn UserLookup>,
    ) -> Self {
        Self {
            encoder: TokenEncoder::new(auth, key),
            decoder: TokenDecoder::new(key),
            lookup,
            lookup_timeout: Duration::from_secs(user_api.timeout_seconds),
        }
    }

    /// Mints a fresh access + refresh pair for an authenticated principal.
    pub fn issue_pair(&self, principal: &Principal) -> AppResult<TokenPair> {
        self.encoder.issue_pair(principal)
    }

    /// Validates an access token and returns the identity it carries.
    pub fn validate_access(&self, token: &str) -> Result<Principal, TokenError> {
        self.decoder.parse(token).map(|claims| claims.principal())
    }

    /// Rotates a refresh token into a new pair.
    ///
    /// The presented token proves possession; the new pair is minted
    /// from the user's current directory record, not from the old
    /// claims, so a role change between rotations is picked up here.
    /// The old refresh token is not revoked and stays usable until its
    /// natural expiry.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshGrant, RefreshError> {
        let claims = self
            .decoder
            .parse(refresh_token)
            .map_err(RefreshError::InvalidToken)?;

        let email = claims.sub;
        debug!(subject = %email, "rotating refresh token");

        let lookup = tokio::time::timeout(self.lookup_timeout, self.lookup.find_by_email(&email));

        let user = match lookup.await {
            Err(_) => {
                warn!(subject = %email, "user directory lookup timed out");
                return Err(RefreshError::UpstreamUnavailable(
                    "user directory lookup timed out".to_string(),
                ));
            }
            Ok(Err(e)) if e.is_retryable() => {
                warn!(subject = %email, error = %e, "user directory unavailable");
                return Err(RefreshError::UpstreamUnavailable(e.message));
            }
            Ok(Err(e)) => return Err(RefreshError::Internal(e)),
            Ok(Ok(None)) => return Err(RefreshError::UserNotFound(email)),
            Ok(Ok(Some(user))) => user,
        };

        let principal = Principal::new(user.email.clone(), user.role);
        let tokens = self
            .encoder
            .issue_pair(&principal)
            .map_err(RefreshError::Internal)?;

        Ok(RefreshGrant { tokens, user })
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("lookup_timeout", &self.lookup_timeout)
            .finish_non_exhaustive()
    }
}
