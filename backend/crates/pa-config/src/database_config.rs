use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_BUSY_TIMEOUT_SECS, DEFAULT_DATABASE_FILENAME,
    DEFAULT_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    pub max_connections: u32,
    /// How long a writer waits for the SQLite lock
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_DATABASE_BUSY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Path must not escape the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::database("database.max_connections must be > 0"));
        }

        if self.busy_timeout_secs == 0 {
            return Err(ConfigError::database("database.busy_timeout_secs must be > 0"));
        }

        Ok(())
    }
}
