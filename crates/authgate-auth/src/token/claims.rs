//! Claims payload shared by access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use authgate_core::types::{Principal, Role};

/// Signed token payload.
///
/// Access and refresh tokens share this encoding and differ only in the
/// TTL used at mint time; the accepting endpoint's context determines
/// which kind it expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email address.
    pub sub: String,
    /// Role at issuance. An unrecognized role name fails deserialization,
    /// which makes the whole token unusable even with a valid signature.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// The verified identity embedded in this token.
    pub fn principal(&self) -> Principal {
        Principal::new(self.sub.clone(), self.role)
    }

    /// Expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
