use crate::DEFAULT_AUTH_ENABLED;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// When false every request is treated as an anonymous staff caller
    pub enabled: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
        }
    }
}
