use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_PATH};

use serde::Deserialize;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix every route is nested under; empty mounts at the root
    pub base_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: String::from(DEFAULT_API_BASE_PATH),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_path.is_empty() {
            return Ok(());
        }

        if !self.base_path.starts_with('/') || self.base_path.ends_with('/') {
            return Err(ConfigError::config(format!(
                "api.base_path must start with '/' and not end with '/', got '{}'",
                self.base_path
            )));
        }

        Ok(())
    }
}
