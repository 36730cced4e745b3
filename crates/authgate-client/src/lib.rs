//! # authgate-client
//!
//! Outbound REST client for the user directory service. Implements the
//! [`UserLookup`](authgate_core::traits::UserLookup) trait over HTTP so
//! the auth crates stay transport-agnostic.

pub mod user_api;

pub use user_api::UserApiClient;
