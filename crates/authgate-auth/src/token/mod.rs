//! Token creation, validation, and the refresh protocol.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod key;
pub mod service;

pub use claims::Claims;
pub use decoder::TokenDecoder;
pub use encoder::{TokenEncoder, TokenPair};
pub use key::SigningKey;
pub use service::{RefreshGrant, TokenService};
