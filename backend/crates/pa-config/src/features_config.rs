use serde::Deserialize;

/// On/off switches for route groups.
///
/// A disabled group is never registered, so its paths answer with the
/// router's generic 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// User directory, profile update and smoke-test routes
    pub api_users: bool,
    /// Profile image upload/delete routes
    pub api_profile_images: bool,
    /// Account deletion and staff administration routes
    pub api_account: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            api_users: true,
            api_profile_images: true,
            api_account: true,
        }
    }
}
