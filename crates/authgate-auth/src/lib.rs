//! # authgate-auth
//!
//! Authentication and authorization core for AuthGate.
//!
//! ## Modules
//!
//! - `token`: signing key material, token encode/decode, and the token
//!   service (issue, validate, refresh)
//! - `policy`: route pattern compilation and the role→route
//!   authorization engine
//! - `gateway`: the per-request decision state machine shared by both
//!   deployment variants of the authentication filter

pub mod error;
pub mod gateway;
pub mod policy;
pub mod token;

pub use error::{RefreshError, TokenError};
pub use gateway::{AuthGateway, GateDecision, RejectReason};
pub use policy::{RouteAuthorizer, RoutePattern};
pub use token::{Claims, RefreshGrant, SigningKey, TokenDecoder, TokenEncoder, TokenPair, TokenService};
