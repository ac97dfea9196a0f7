use crate::{
    ApiConfig, AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, FeaturesConfig,
    LoggingConfig, NotificationConfig, PlatformConfig, ProfileImageConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

pub const CONFIG_DIR_ENV: &str = "PA_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".pa";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
    pub features: FeaturesConfig,
    pub profile_images: ProfileImageConfig,
    pub notification: NotificationConfig,
    pub platform: PlatformConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PA_CONFIG_DIR env var, else use ./.pa/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PA_CONFIG_DIR env var > ./.pa/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.api.validate()?;
        self.profile_images.validate()?;
        self.notification.validate()?;
        self.platform.validate()?;

        // Account deletion waits on the notifier while holding the write lock
        if self.notification.timeout_secs >= self.database.busy_timeout_secs {
            return Err(ConfigError::notification(format!(
                "notification.timeout_secs ({}) must be lower than database.busy_timeout_secs ({})",
                self.notification.timeout_secs, self.database.busy_timeout_secs
            )));
        }

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the profile image storage directory.
    pub fn profile_image_dir(&self) -> ConfigErrorResult<PathBuf> {
        let dir = Path::new(&self.profile_images.storage_dir);
        if dir.is_absolute() {
            return Ok(dir.to_path_buf());
        }
        Ok(Self::config_dir()?.join(dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max body {} bytes)",
            self.server.host, self.server.port, self.server.max_body_bytes
        );
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  auth: {}",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!("  api: base_path='{}'", self.api.base_path);
        info!(
            "  features: api_users={}, api_profile_images={}, api_account={}",
            self.features.api_users, self.features.api_profile_images, self.features.api_account
        );
        info!(
            "  profile_images: dir={}, bytes={}..={}, sizes={:?}",
            self.profile_images.storage_dir,
            self.profile_images.min_bytes,
            self.profile_images.max_bytes,
            self.profile_images.sizes
        );
        info!(
            "  notification: {:?} (timeout {}s)",
            self.notification.backend, self.notification.timeout_secs
        );
        info!(
            "  platform: {} ({}), default language {}",
            self.platform.platform_name, self.platform.site_name, self.platform.default_language
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PA_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse("PA_SERVER_MAX_BODY_BYTES", &mut self.server.max_body_bytes);

        // Database
        Self::apply_env_string("PA_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "PA_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "PA_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Auth
        Self::apply_env_bool("PA_AUTH_ENABLED", &mut self.auth.enabled);

        // Logging
        Self::apply_env_parse("PA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PA_LOG_FILE", &mut self.logging.file);

        // Api
        Self::apply_env_string("PA_API_BASE_PATH", &mut self.api.base_path);

        // Features
        Self::apply_env_bool("PA_FEATURE_API_USERS", &mut self.features.api_users);
        Self::apply_env_bool(
            "PA_FEATURE_API_PROFILE_IMAGES",
            &mut self.features.api_profile_images,
        );
        Self::apply_env_bool("PA_FEATURE_API_ACCOUNT", &mut self.features.api_account);

        // Profile images
        Self::apply_env_string(
            "PA_PROFILE_IMAGES_STORAGE_DIR",
            &mut self.profile_images.storage_dir,
        );
        Self::apply_env_string(
            "PA_PROFILE_IMAGES_SECRET_KEY",
            &mut self.profile_images.secret_key,
        );
        Self::apply_env_parse(
            "PA_PROFILE_IMAGES_MAX_BYTES",
            &mut self.profile_images.max_bytes,
        );
        Self::apply_env_parse(
            "PA_PROFILE_IMAGES_MIN_BYTES",
            &mut self.profile_images.min_bytes,
        );

        // Notification
        Self::apply_env_parse("PA_NOTIFICATION_BACKEND", &mut self.notification.backend);
        Self::apply_env_option_string(
            "PA_NOTIFICATION_WEBHOOK_URL",
            &mut self.notification.webhook_url,
        );
        Self::apply_env_parse(
            "PA_NOTIFICATION_TIMEOUT_SECS",
            &mut self.notification.timeout_secs,
        );

        // Platform
        Self::apply_env_string(
            "PA_PLATFORM_DEFAULT_LANGUAGE",
            &mut self.platform.default_language,
        );
        Self::apply_env_string("PA_PLATFORM_NAME", &mut self.platform.platform_name);
        Self::apply_env_string("PA_PLATFORM_SITE_NAME", &mut self.platform.site_name);
        Self::apply_env_string(
            "PA_PLATFORM_CONTACT_EMAIL",
            &mut self.platform.contact_email,
        );
        Self::apply_env_string("PA_PLATFORM_LMS_ROOT_URL", &mut self.platform.lms_root_url);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
