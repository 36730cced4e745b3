//! HTTP client for the user directory service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};

use authgate_core::AppResult;
use authgate_core::config::user_api::UserApiConfig;
use authgate_core::error::AppError;
use authgate_core::traits::UserLookup;
use authgate_core::types::UserRecord;

/// REST client for the user directory.
///
/// Connection failures and 5xx responses surface as retryable
/// `ServiceUnavailable` errors; everything else is terminal for the
/// request that triggered it.
#[derive(Debug, Clone)]
pub struct UserApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct CredentialCheck<'a> {
    email: &'a str,
    password: &'a str,
}

impl UserApiClient {
    /// Builds a client from configuration.
    ///
    /// The timeout applies per request, covering connect and body read.
    pub fn new(config: &UserApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("failed to build user API client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(context: &str, err: reqwest::Error) -> AppError {
        if err.is_timeout() || err.is_connect() {
            warn!(context, error = %err, "user directory unreachable");
            AppError::service_unavailable(format!("{context}: {err}"))
        } else {
            AppError::external_service(format!("{context}: {err}"))
        }
    }

    async fn parse_user(context: &str, response: reqwest::Response) -> AppResult<UserRecord> {
        response
            .json::<UserRecord>()
            .await
            .map_err(|e| AppError::external_service(format!("{context}: invalid user payload: {e}")))
    }
}

#[async_trait]
impl UserLookup for UserApiClient {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let url = self.url(&format!("/users/email/{email}"));
        debug!(email, "looking up user by email");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport_error("user lookup failed", e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_server_error() => Err(AppError::service_unavailable(format!(
                "user directory returned {status}"
            ))),
            status if !status.is_success() => Err(AppError::external_service(format!(
                "user lookup returned unexpected status {status}"
            ))),
            _ => Ok(Some(Self::parse_user("user lookup", response).await?)),
        }
    }

    async fn check_credentials(&self, email: &str, password: &str) -> AppResult<UserRecord> {
        let url = self.url("/users/user-check");
        debug!(email, "verifying credentials against user directory");

        let response = self
            .http
            .post(&url)
            .json(&CredentialCheck { email, password })
            .send()
            .await
            .map_err(|e| Self::transport_error("credential check failed", e))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                Err(AppError::authentication("invalid email or password"))
            }
            status if status.is_server_error() => Err(AppError::service_unavailable(format!(
                "user directory returned {status}"
            ))),
            status if !status.is_success() => Err(AppError::external_service(format!(
                "credential check returned unexpected status {status}"
            ))),
            _ => Self::parse_user("credential check", response).await,
        }
    }
}
