//! User lookup capability backed by the external user-management service.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::UserRecord;

/// Access to user records held by the external user-management service.
///
/// AuthGate owns no user storage; both the login path (credential check)
/// and the refresh path (re-read the current record so role changes take
/// effect) go through this trait. Implementations must be safe for
/// unlimited concurrent invocation.
#[async_trait]
pub trait UserLookup: Send + Sync + 'static {
    /// Fetch the current record for the given email address.
    ///
    /// Returns `Ok(None)` when the user does not exist. Transport-level
    /// failures surface as errors so callers can distinguish "gone" from
    /// "unreachable".
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;

    /// Verify a credential pair and return the matching record.
    ///
    /// Fails with an authentication error when the credentials do not
    /// match any user.
    async fn check_credentials(&self, email: &str, password: &str) -> AppResult<UserRecord>;
}
