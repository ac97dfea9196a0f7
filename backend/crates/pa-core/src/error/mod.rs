use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity not found: {username} {location}")]
    IdentityNotFound {
        username: String,
        location: ErrorLocation,
    },

    #[error("Retirement already requested for {username} {location}")]
    RetirementExists {
        username: String,
        location: ErrorLocation,
    },

    #[error("Identity store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
