//! Integration tests for the login/refresh/me flow.

use http::StatusCode;

use authgate_core::types::Role;

use crate::helpers::{StubUsers, TestApp, test_user};

#[tokio::test]
async fn login_success_returns_tokens_and_profile() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "client@example.com",
                "password": "client-pass",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("accessToken").is_some());
    assert!(response.body.get("refreshToken").is_some());
    assert_eq!(response.body["role"], "CLIENT");
    assert_eq!(response.body["email"], "client@example.com");
    assert_eq!(response.body["id"], 2);
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "client@example.com",
                "password": "wrong",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["code"], "AUTHENTICATION");
    assert!(response.body.get("message").is_some());
}

#[tokio::test]
async fn login_with_unknown_user_is_401() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "whatever",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_rotates_tokens() {
    let app = TestApp::new();

    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "admin@example.com",
                "password": "admin-pass",
            })),
            None,
        )
        .await;
    let refresh_token = login.body["refreshToken"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());
    assert!(response.body.get("refresh_token").is_some());
    assert_eq!(response.body["user_id"], "CC-1001");

    // The rotated access token is immediately usable.
    let access = response.body["access_token"].as_str().unwrap().to_string();
    let me = app.request("GET", "/auth/me", None, Some(&access)).await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn refresh_reflects_a_role_change() {
    // Mint tokens while the account is CLIENT, then refresh against a
    // directory that now reports ADMIN.
    let before = TestApp::new();
    let login = before
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "client@example.com",
                "password": "client-pass",
            })),
            None,
        )
        .await;
    let refresh_token = login.body["refreshToken"].as_str().unwrap().to_string();

    let after = TestApp::with_users(StubUsers::new(vec![(
        test_user(2, "client@example.com", "CC-1002", Role::Admin),
        "client-pass",
    )]));

    let response = after
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let access = response.body["access_token"].as_str().unwrap().to_string();
    let me = after.request("GET", "/auth/me", None, Some(&access)).await;
    assert_eq!(me.body["role"], "ADMIN");
}

#[tokio::test]
async fn refresh_with_garbage_token_is_401() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "refresh_token": "not-a-token" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["code"], "AUTHENTICATION");
}

#[tokio::test]
async fn refresh_for_deleted_user_is_401() {
    let app = TestApp::new();
    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "client@example.com",
                "password": "client-pass",
            })),
            None,
        )
        .await;
    let refresh_token = login.body["refreshToken"].as_str().unwrap().to_string();

    let empty = TestApp::with_users(StubUsers::new(vec![]));
    let response = empty
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_while_directory_is_down_is_503() {
    let app = TestApp::new();
    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "client@example.com",
                "password": "client-pass",
            })),
            None,
        )
        .await;
    let refresh_token = login.body["refreshToken"].as_str().unwrap().to_string();

    app.users.set_down(true);

    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn me_returns_the_verified_identity() {
    let app = TestApp::new();
    let token = app.login("recruiter@example.com", "recruiter-pass").await;

    let response = app.request("GET", "/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "recruiter@example.com");
    assert_eq!(response.body["role"], "RECRUITER");
    assert_eq!(response.body["authority"], "ROLE_RECRUITER");
}

#[tokio::test]
async fn me_without_a_token_is_401() {
    let app = TestApp::new();

    let response = app.request("GET", "/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text, "Missing or invalid Authorization header.");
}
