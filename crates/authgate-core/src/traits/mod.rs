//! Capability traits implemented by infrastructure crates.

pub mod user_lookup;

pub use user_lookup::UserLookup;
