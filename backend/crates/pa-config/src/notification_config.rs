use crate::{ConfigError, ConfigErrorResult, DEFAULT_NOTIFICATION_TIMEOUT_SECS};

use std::str::FromStr;

use serde::Deserialize;

/// How account notifications are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationBackend {
    /// Write the composed message to the log only
    #[default]
    Log,
    /// POST the composed message as JSON to `webhook_url`
    Webhook,
}

impl FromStr for NotificationBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "webhook" => Ok(Self::Webhook),
            other => Err(format!("unknown notification backend '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub backend: NotificationBackend,
    pub webhook_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            backend: NotificationBackend::default(),
            webhook_url: None,
            timeout_secs: DEFAULT_NOTIFICATION_TIMEOUT_SECS,
        }
    }
}

impl NotificationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.backend == NotificationBackend::Webhook {
            match self.webhook_url.as_deref() {
                Some(url) if url.starts_with("http://") || url.starts_with("https://") => {}
                Some(url) => {
                    return Err(ConfigError::notification(format!(
                        "notification.webhook_url must be an http(s) URL, got '{}'",
                        url
                    )));
                }
                None => {
                    return Err(ConfigError::notification(
                        "notification.webhook_url is required when backend = \"webhook\"",
                    ));
                }
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::notification(
                "notification.timeout_secs must be > 0",
            ));
        }

        Ok(())
    }
}
