use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Rejection of an uploaded profile image.
///
/// `developer_message` is for API clients, `user_message` is safe to show
/// to the person who uploaded the file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{developer_message}")]
pub struct ImageValidationError {
    pub developer_message: String,
    pub user_message: String,
}

impl ImageValidationError {
    pub fn new(developer_message: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            developer_message: developer_message.into(),
            user_message: user_message.into(),
        }
    }

    /// Same text for both audiences
    pub fn both(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            developer_message: message.clone(),
            user_message: message,
        }
    }
}

#[derive(Error, Debug)]
pub enum MediaError {
    #[error(transparent)]
    Validation(#[from] ImageValidationError),

    #[error("IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Image processing failed: {source} {location}")]
    Image {
        #[source]
        source: image::ImageError,
        location: ErrorLocation,
    },
}

impl MediaError {
    #[track_caller]
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn image(source: image::ImageError) -> Self {
        Self::Image {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, MediaError>;
