//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use authgate_auth::gateway::AuthGateway;
use authgate_auth::token::TokenService;
use authgate_core::config::AppConfig;
use authgate_core::error::AppError;
use authgate_core::traits::UserLookup;

/// How the gateway hands the verified identity to downstream code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMode {
    /// Attach the principal as a request extension only.
    Ambient,
    /// Also inject the subject into a `user-id` request header, for
    /// deployments that proxy to services reading identity from headers.
    ForwardHeader,
}

impl IdentityMode {
    /// Parses the configured mode name.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "ambient" => Ok(Self::Ambient),
            "forward-header" => Ok(Self::ForwardHeader),
            other => Err(AppError::configuration(format!(
                "unknown identity mode: {other:?} (expected \"ambient\" or \"forward-header\")"
            ))),
        }
    }
}

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Per-request authentication and authorization gate.
    pub gateway: Arc<AuthGateway>,
    /// Token issue/validate/refresh service.
    pub tokens: Arc<TokenService>,
    /// User directory client.
    pub users: Arc<dyn UserLookup>,
    /// How verified identity reaches downstream code.
    pub identity_mode: IdentityMode,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("identity_mode", &self.identity_mode)
            .finish_non_exhaustive()
    }
}
