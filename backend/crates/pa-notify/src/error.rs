use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification transport error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Notification rejected with status {status} {location}")]
    Rejected {
        status: u16,
        location: ErrorLocation,
    },
}

impl NotifyError {
    /// Failure cause without the capture location, safe to return to clients
    pub fn reason(&self) -> String {
        match self {
            NotifyError::Http { message, .. } => message.clone(),
            NotifyError::Rejected { status, .. } => {
                format!("Notification rejected with status {status}")
            }
        }
    }

    #[track_caller]
    pub fn rejected(status: u16) -> Self {
        NotifyError::Rejected {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for NotifyError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        NotifyError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = StdResult<T, NotifyError>;
