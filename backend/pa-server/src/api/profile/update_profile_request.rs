use pa_core::ProfileUpdate;

use serde::Deserialize;

/// Body of `POST /users/update/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(flatten)]
    pub update: ProfileUpdate,
}
