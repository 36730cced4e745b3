//! Gateway middleware: runs the authentication/authorization gate for
//! every inbound request before routing.

use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use authgate_auth::gateway::{GateDecision, RejectReason};

use crate::extractors::CurrentUser;
use crate::state::{AppState, IdentityMode};

/// Evaluates the gate and either forwards the request with an identity
/// attached or short-circuits with a rejection.
///
/// Rejections are plain-text bodies: the gate guards arbitrary proxied
/// routes, so it cannot assume the caller negotiates JSON.
pub async fn gate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let authorization = header_str(&request, header::AUTHORIZATION);
    let upgrade = header_str(&request, header::UPGRADE);

    match state
        .gateway
        .evaluate(&path, authorization.as_deref(), upgrade.as_deref())
    {
        GateDecision::Bypass => next.run(request).await,
        GateDecision::Forward(principal) => {
            if state.identity_mode == IdentityMode::ForwardHeader {
                match HeaderValue::try_from(principal.subject.as_str()) {
                    Ok(value) => {
                        request.headers_mut().insert("user-id", value);
                    }
                    Err(_) => {
                        warn!(subject = %principal.subject, "subject not header-safe, skipping user-id injection");
                    }
                }
            }
            request.extensions_mut().insert(CurrentUser(principal));
            next.run(request).await
        }
        GateDecision::Reject(reason) => reject(reason),
    }
}

fn header_str(request: &Request, name: header::HeaderName) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

fn reject(reason: RejectReason) -> Response {
    match reason {
        RejectReason::MissingCredential => (
            StatusCode::UNAUTHORIZED,
            "Missing or invalid Authorization header.".to_string(),
        )
            .into_response(),
        RejectReason::InvalidToken(e) => {
            (StatusCode::UNAUTHORIZED, format!("Invalid token: {e}")).into_response()
        }
        RejectReason::Forbidden { role } => {
            (StatusCode::FORBIDDEN, format!("Access denied for role {role}")).into_response()
        }
    }
}
