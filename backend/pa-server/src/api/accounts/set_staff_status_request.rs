use serde::Deserialize;

/// Body of `POST /users/account/admin/{username}/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetStaffStatusRequest {
    #[serde(default)]
    pub is_staff: Option<bool>,
}
