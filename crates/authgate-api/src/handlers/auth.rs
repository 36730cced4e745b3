//! Auth handlers: login, refresh, me.

use axum::Json;
use axum::extract::State;
use tracing::info;

use authgate_core::types::Principal;

use crate::dto::request::{LoginRequest, RefreshRequest};
use crate::dto::response::{LoginResponse, MeResponse, RefreshResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /auth/login
///
/// Verifies credentials against the user directory and mints a fresh
/// token pair. Bad credentials surface as a 401 JSON error body rather
/// than leaking which of email or password was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state.users.check_credentials(&req.email, &req.password).await?;

    let principal = Principal::new(user.email.clone(), user.role);
    let pair = state.tokens.issue_pair(&principal)?;

    info!(subject = %user.email, role = %user.role, "login succeeded");

    Ok(Json(LoginResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        role: user.role,
        email: user.email,
        id: user.id,
    }))
}

/// POST /auth/refresh
///
/// Rotates a refresh token into a new pair minted from the user's
/// current directory record.
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let grant = state.tokens.refresh(&req.refresh_token).await?;

    Ok(Json(RefreshResponse {
        access_token: grant.tokens.access_token,
        refresh_token: grant.tokens.refresh_token,
        user_id: grant.user.identification,
    }))
}

/// GET /auth/me
///
/// Echoes the identity the gateway verified for this request.
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        email: auth.subject.clone(),
        role: auth.role,
        authority: auth.authority(),
    })
}
