use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROFILE_IMAGE_DIRECTORY,
    DEFAULT_PROFILE_IMAGE_MAX_BYTES, DEFAULT_PROFILE_IMAGE_MIN_BYTES,
    DEFAULT_PROFILE_IMAGE_SECRET_KEY,
};

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileImageConfig {
    /// Where generated variants are written, relative to the config directory
    pub storage_dir: String,
    /// Seed mixed into variant file names so they cannot be guessed
    pub secret_key: String,
    /// Largest accepted upload in bytes
    pub max_bytes: u64,
    /// Smallest accepted upload in bytes
    pub min_bytes: u64,
    /// Variant name -> edge length in pixels
    pub sizes: BTreeMap<String, u32>,
}

impl Default for ProfileImageConfig {
    fn default() -> Self {
        Self {
            storage_dir: String::from(DEFAULT_PROFILE_IMAGE_DIRECTORY),
            secret_key: String::from(DEFAULT_PROFILE_IMAGE_SECRET_KEY),
            max_bytes: DEFAULT_PROFILE_IMAGE_MAX_BYTES,
            min_bytes: DEFAULT_PROFILE_IMAGE_MIN_BYTES,
            sizes: BTreeMap::from([
                (String::from("full"), 500),
                (String::from("large"), 120),
                (String::from("medium"), 50),
                (String::from("small"), 30),
            ]),
        }
    }
}

impl ProfileImageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.secret_key.is_empty() {
            return Err(ConfigError::profile_images(
                "profile_images.secret_key must not be empty",
            ));
        }

        if self.min_bytes >= self.max_bytes {
            return Err(ConfigError::profile_images(format!(
                "profile_images.min_bytes ({}) must be less than max_bytes ({})",
                self.min_bytes, self.max_bytes
            )));
        }

        if self.sizes.is_empty() {
            return Err(ConfigError::profile_images(
                "profile_images.sizes must name at least one variant",
            ));
        }

        if let Some((name, _)) = self.sizes.iter().find(|(_, px)| **px == 0) {
            return Err(ConfigError::profile_images(format!(
                "profile_images.sizes.{} must be > 0",
                name
            )));
        }

        Ok(())
    }
}
