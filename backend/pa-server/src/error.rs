use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pa_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] pa_db::DbError),

    #[error("Notification backend error: {0}")]
    Notifier(#[from] pa_notify::NotifyError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
