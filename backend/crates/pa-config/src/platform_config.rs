use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONTACT_EMAIL, DEFAULT_LANGUAGE_CODE,
    DEFAULT_LMS_ROOT_URL, DEFAULT_PLATFORM_NAME, DEFAULT_SITE_NAME,
};

use serde::Deserialize;

/// Platform-wide settings shared with notification templates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Locale used when a user has no language preference
    pub default_language: String,
    pub platform_name: String,
    pub site_name: String,
    pub contact_email: String,
    pub lms_root_url: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            default_language: String::from(DEFAULT_LANGUAGE_CODE),
            platform_name: String::from(DEFAULT_PLATFORM_NAME),
            site_name: String::from(DEFAULT_SITE_NAME),
            contact_email: String::from(DEFAULT_CONTACT_EMAIL),
            lms_root_url: String::from(DEFAULT_LMS_ROOT_URL),
        }
    }
}

impl PlatformConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_language.trim().is_empty() {
            return Err(ConfigError::platform(
                "platform.default_language must not be empty",
            ));
        }

        if !self.contact_email.contains('@') {
            return Err(ConfigError::platform(format!(
                "platform.contact_email must be an email address, got '{}'",
                self.contact_email
            )));
        }

        Ok(())
    }
}
