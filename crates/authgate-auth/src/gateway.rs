//! Request gate: the single decision point every inbound request
//! passes through before reaching a handler.

use std::sync::Arc;

use tracing::debug;

use authgate_core::types::{Principal, Role};

use crate::error::TokenError;
use crate::policy::RouteAuthorizer;
use crate::token::TokenService;

/// What the gate decided for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The request is exempt from authentication; pass it through
    /// without an identity.
    Bypass,
    /// Credentials verified and the route is permitted; forward with
    /// this identity attached.
    Forward(Principal),
    /// The request must be rejected.
    Reject(RejectReason),
}

/// Why a request was rejected at the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// No `Authorization: Bearer` credential was presented.
    MissingCredential,
    /// A credential was presented but failed validation.
    InvalidToken(TokenError),
    /// The credential is valid but the role may not reach this route.
    Forbidden { role: Role },
}

/// Evaluates authentication and route authorization for each request.
///
/// The gate never reads bodies and never writes responses itself; it
/// returns a [`GateDecision`] for the HTTP layer to act on.
#[derive(Clone)]
pub struct AuthGateway {
    tokens: Arc<TokenService>,
    routes: Arc<RouteAuthorizer>,
    exempt_prefixes: Vec<String>,
}

impl AuthGateway {
    pub fn new(
        tokens: Arc<TokenService>,
        routes: Arc<RouteAuthorizer>,
        exempt_prefixes: Vec<String>,
    ) -> Self {
        Self {
            tokens,
            routes,
            exempt_prefixes,
        }
    }

    /// Runs the gate for one request.
    ///
    /// `path` is the URL path without any query string. `authorization`
    /// and `upgrade` are the raw header values when present. Checks run
    /// in a fixed order: protocol upgrades and exempt prefixes bypass
    /// the gate entirely, then the bearer credential is required,
    /// validated, and finally checked against the route policy.
    pub fn evaluate(
        &self,
        path: &str,
        authorization: Option<&str>,
        upgrade: Option<&str>,
    ) -> GateDecision {
        // Websocket handshakes authenticate within their own protocol
        // after the upgrade completes.
        if upgrade.is_some_and(|v| v.eq_ignore_ascii_case("websocket")) {
            debug!(path, "bypassing gate for protocol upgrade");
            return GateDecision::Bypass;
        }

        if self
            .exempt_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
        {
            return GateDecision::Bypass;
        }

        let Some(token) = authorization.and_then(|v| v.strip_prefix("Bearer ")) else {
            return GateDecision::Reject(RejectReason::MissingCredential);
        };

        let principal = match self.tokens.validate_access(token) {
            Ok(principal) => principal,
            Err(e) => {
                debug!(path, error = %e, "rejecting invalid token");
                return GateDecision::Reject(RejectReason::InvalidToken(e));
            }
        };

        if !self.routes.decide(principal.role, path) {
            debug!(path, role = %principal.role, subject = %principal.subject, "route denied");
            return GateDecision::Reject(RejectReason::Forbidden {
                role: principal.role,
            });
        }

        GateDecision::Forward(principal)
    }
}

impl std::fmt::Debug for AuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGateway")
            .field("exempt_prefixes", &self.exempt_prefixes)
            .finish_non_exhaustive()
    }
}
