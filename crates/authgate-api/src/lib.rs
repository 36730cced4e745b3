//! # authgate-api
//!
//! HTTP layer for AuthGate built on Axum.
//!
//! Provides the auth endpoints, the request gateway middleware, the
//! `AuthUser` extractor, DTOs, CORS/logging layers, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::{AppState, IdentityMode};
