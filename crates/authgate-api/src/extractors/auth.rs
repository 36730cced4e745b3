//! `AuthUser` extractor for handlers behind the gateway.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use authgate_core::error::AppError;
use authgate_core::types::Principal;

use crate::error::ApiError;
use crate::state::AppState;

/// Verified identity attached to the request by the gateway middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Principal);

/// Extractor that hands the verified principal to a handler.
///
/// The gateway middleware runs before routing and attaches
/// [`CurrentUser`] for every forwarded request, so the extension being
/// absent means the route was reached without passing the gate.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl std::ops::Deref for AuthUser {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::authentication("Authentication required"))?;

        Ok(AuthUser(user.0))
    }
}
