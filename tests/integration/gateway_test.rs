//! Integration tests for the request gateway: bypass rules, token
//! rejection, and route authorization.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::HeaderMap;
use axum::routing::get;
use chrono::Utc;
use http::{Request, StatusCode};
use tower::ServiceExt;

use authgate_api::app::build_state;
use authgate_api::{AppState, middleware};
use authgate_core::config::AppConfig;
use authgate_core::traits::UserLookup;
use authgate_core::types::{Principal, Role};

use crate::helpers::{StubUsers, TestApp, test_user};

#[tokio::test]
async fn health_bypasses_the_gate() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn unknown_path_without_credentials_is_401_not_404() {
    // The gate runs before routing, so an unauthenticated probe cannot
    // map out which routes exist.
    let app = TestApp::new();

    let response = app.request("GET", "/does/not/exist", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text, "Missing or invalid Authorization header.");
}

#[tokio::test]
async fn admin_reaches_unrouted_paths_and_gets_404() {
    // ADMIN policy is /**: the gate forwards, then routing says 404.
    let app = TestApp::new();
    let token = app.login("admin@example.com", "admin-pass").await;

    let response = app
        .request("GET", "/does/not/exist", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn expired_token_is_rejected_with_its_cause() {
    let app = TestApp::new();
    let now = Utc::now().timestamp();
    let token = app.sign_token("client@example.com", Role::Client, now - 7200, now - 3600);

    let response = app.request("GET", "/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text, "Invalid token: token has expired");
}

#[tokio::test]
async fn tampered_token_is_rejected() {
    let app = TestApp::new();
    let token = app.login("client@example.com", "client-pass").await;

    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app.request("GET", "/auth/me", None, Some(&tampered)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text, "Invalid token: token signature is invalid");
}

#[tokio::test]
async fn malformed_token_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/auth/me", None, Some("definitely-not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text, "Invalid token: token is malformed");
}

#[tokio::test]
async fn valid_token_on_a_route_outside_its_policy_is_403() {
    let app = TestApp::new();
    let token = app.login("client@example.com", "client-pass").await;

    let response = app.request("GET", "/vacancies/7", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.text, "Access denied for role CLIENT");
}

#[tokio::test]
async fn recruiter_policy_permits_its_own_routes() {
    let app = TestApp::new();
    let token = app.login("recruiter@example.com", "recruiter-pass").await;

    // Permitted by policy but unrouted: the gate forwards, routing 404s.
    let response = app.request("GET", "/vacancies/7", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // Outside the recruiter policy.
    let response = app.request("GET", "/profile/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

/// Router with a single route that echoes the `user-id` request header,
/// wrapped in the gateway middleware. Used to observe what the gate
/// forwards downstream.
fn echo_router(state: AppState) -> Router {
    async fn echo_user_id(headers: HeaderMap) -> String {
        headers
            .get("user-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    Router::new()
        .route("/profile/me", get(echo_user_id))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::gate,
        ))
        .with_state(state)
}

fn state_with_identity_mode(mode: &str) -> AppState {
    let mut config =
        AppConfig::load("tests/fixtures/test_config.toml").expect("Failed to load test config");
    config.server.identity_mode = mode.to_string();

    let users = Arc::new(StubUsers::new(vec![(
        test_user(2, "client@example.com", "CC-1002", Role::Client),
        "client-pass",
    )]));

    build_state(config, users as Arc<dyn UserLookup>).expect("Failed to build app state")
}

fn bearer_request(token: &str) -> Request<Body> {
    Request::builder()
        .uri("/profile/me")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn forward_header_mode_injects_the_verified_subject() {
    let state = state_with_identity_mode("forward-header");
    let token = state
        .tokens
        .issue_pair(&Principal::new("client@example.com", Role::Client))
        .unwrap()
        .access_token;

    let response = echo_router(state)
        .oneshot(bearer_request(&token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    assert_eq!(&body[..], b"client@example.com");
}

#[tokio::test]
async fn forward_header_mode_ignores_a_spoofed_user_id() {
    // A client-supplied user-id header must be replaced by the verified
    // subject, never trusted.
    let state = state_with_identity_mode("forward-header");
    let token = state
        .tokens
        .issue_pair(&Principal::new("client@example.com", Role::Client))
        .unwrap()
        .access_token;

    let request = Request::builder()
        .uri("/profile/me")
        .header("Authorization", format!("Bearer {token}"))
        .header("user-id", "admin@example.com")
        .body(Body::empty())
        .unwrap();

    let response = echo_router(state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    assert_eq!(&body[..], b"client@example.com");
}

#[tokio::test]
async fn ambient_mode_does_not_inject_a_user_id_header() {
    let state = state_with_identity_mode("ambient");
    let token = state
        .tokens
        .issue_pair(&Principal::new("client@example.com", Role::Client))
        .unwrap()
        .access_token;

    let response = echo_router(state)
        .oneshot(bearer_request(&token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn websocket_upgrade_bypasses_the_gate() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("GET")
        .uri("/stream/ws")
        .header("Connection", "Upgrade")
        .header("Upgrade", "websocket")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    // No websocket route exists, but the gate let the handshake
    // through: 404 from routing, not 401 from the gate.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_websocket_upgrade_still_requires_credentials() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("GET")
        .uri("/stream/ws")
        .header("Upgrade", "h2c")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
