//! # authgate-core
//!
//! Core crate for AuthGate. Contains configuration schemas, shared domain
//! types (roles, principals, user records), the `UserLookup` trait, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other AuthGate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
