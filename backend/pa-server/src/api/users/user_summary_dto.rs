use pa_core::Identity;

use serde::Serialize;

/// One entry of the user directory: `{"id": 7, "name": "alice"}`
#[derive(Debug, Clone, Serialize)]
pub struct UserSummaryDto {
    pub id: i64,
    /// The username, not the display name
    pub name: String,
}

impl From<Identity> for UserSummaryDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.username,
        }
    }
}
