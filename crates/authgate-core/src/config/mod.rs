//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Everything here is read once at process start; the running
//! components receive immutable snapshots.

pub mod app;
pub mod auth;
pub mod logging;
pub mod policy;
pub mod user_api;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::auth::AuthConfig;
use self::logging::LoggingConfig;
use self::policy::PolicyConfig;
use self::user_api::UserApiConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the TOML configuration file plus
/// `AUTHGATE_`-prefixed environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Token signing and TTL settings.
    pub auth: AuthConfig,
    /// Role→route access policy.
    pub policy: PolicyConfig,
    /// External user-management service settings.
    pub user_api: UserApiConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file, then overlay environment
    /// variables prefixed with `AUTHGATE__` (double underscore as the
    /// section separator, e.g. `AUTHGATE__AUTH__JWT_SECRET`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(
                config::Environment::with_prefix("AUTHGATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
