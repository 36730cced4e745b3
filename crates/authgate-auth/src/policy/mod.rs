//! Route authorization policy: pattern compilation and the
//! deny-by-default decision engine.

pub mod engine;
pub mod pattern;

pub use engine::RouteAuthorizer;
pub use pattern::RoutePattern;
