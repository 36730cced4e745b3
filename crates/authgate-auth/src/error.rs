//! Typed failures for token validation and the refresh protocol.
//!
//! These are returned as values, never raised for control flow; only the
//! HTTP layer converts them into status codes.

use thiserror::Error;

use authgate_core::error::AppError;

/// Why a token failed to parse.
///
/// Surfaced unchanged to callers of `validate_access`; the gateway maps
/// each variant to a 401 with a matching diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token cannot be decoded, names a different algorithm, or
    /// carries claims we do not recognize.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not verify against the process key.
    #[error("token signature is invalid")]
    SignatureInvalid,
    /// The token's expiry is in the past.
    #[error("token has expired")]
    Expired,
}

/// Why a refresh attempt was denied.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// The presented refresh token failed to parse.
    #[error("invalid refresh token: {0}")]
    InvalidToken(TokenError),
    /// The token parsed but its subject no longer resolves to a user.
    #[error("no user record for subject '{0}'")]
    UserNotFound(String),
    /// The user lookup failed or timed out; the caller may retry.
    #[error("user lookup unavailable: {0}")]
    UpstreamUnavailable(String),
    /// Token minting failed after a successful lookup.
    #[error("failed to issue tokens")]
    Internal(#[source] AppError),
}

impl RefreshError {
    /// Only upstream unavailability is safe to retry; every other
    /// variant is terminal for this attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable(_))
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::authentication(err.to_string())
    }
}

impl From<RefreshError> for AppError {
    fn from(err: RefreshError) -> Self {
        match err {
            RefreshError::InvalidToken(_) | RefreshError::UserNotFound(_) => {
                AppError::authentication(err.to_string())
            }
            RefreshError::UpstreamUnavailable(_) => AppError::service_unavailable(err.to_string()),
            RefreshError::Internal(source) => source,
        }
    }
}
