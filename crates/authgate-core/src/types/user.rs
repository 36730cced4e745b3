//! User record returned by the external user-management service.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// User profile as served by the user-management REST API.
///
/// AuthGate never stores these; a record is fetched per login or refresh
/// and discarded once tokens are minted. Unknown JSON fields from the
/// upstream service are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Internal user id assigned by the user service.
    pub id: i64,
    /// First name.
    #[serde(default)]
    pub name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Email address; doubles as the token subject.
    pub email: String,
    /// National identification number.
    #[serde(default)]
    pub identification: String,
    /// Role assigned to the user.
    pub role: Role,
    /// Optional URI of the user's CV file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri_cv_file: Option<String>,
}
