mod api_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod features_config;
mod log_level;
mod logging_config;
mod notification_config;
mod platform_config;
mod profile_image_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use features_config::FeaturesConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notification_config::{NotificationBackend, NotificationConfig};
pub use platform_config::PlatformConfig;
pub use profile_image_config::ProfileImageConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
const MIN_MAX_BODY_BYTES: usize = 64 * 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DATABASE_BUSY_TIMEOUT_SECS: u64 = 15;

const DEFAULT_AUTH_ENABLED: bool = true;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_API_BASE_PATH: &str = "/openedx_plugin/api";

const DEFAULT_PROFILE_IMAGE_DIRECTORY: &str = "media/profile-images";
const DEFAULT_PROFILE_IMAGE_SECRET_KEY: &str = "placeholder_secret_key";
const DEFAULT_PROFILE_IMAGE_MAX_BYTES: u64 = 1024 * 1024;
const DEFAULT_PROFILE_IMAGE_MIN_BYTES: u64 = 100;

const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 10;

const DEFAULT_LANGUAGE_CODE: &str = "en";
const DEFAULT_PLATFORM_NAME: &str = "Open edX";
const DEFAULT_SITE_NAME: &str = "localhost";
const DEFAULT_CONTACT_EMAIL: &str = "contact@example.com";
const DEFAULT_LMS_ROOT_URL: &str = "http://localhost:18000";
