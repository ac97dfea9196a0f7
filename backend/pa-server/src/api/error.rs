//! REST API error types
//!
//! Every error renders as a small JSON object. Most carry `{"message"}`;
//! image validation failures carry `{"developer_message", "user_message"}`.

use pa_core::CoreError;
use pa_db::DbError;
use pa_media::{ImageValidationError, MediaError};

use std::panic::Location;

use axum::{
    Json,
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// `{"message": ...}` error body
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error body for rejected profile images
#[derive(Debug, Serialize)]
pub struct ImageErrorBody {
    pub developer_message: String,
    pub user_message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// State conflict, reported as 400 to match the other input errors
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Rejected profile image (400)
    #[error("Image validation failed: {developer_message} {location}")]
    ImageValidation {
        developer_message: String,
        user_message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or invalid credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The 400 every handler returns for an unknown username
    #[track_caller]
    pub fn unknown_user(username: &str) -> Self {
        Self::bad_request(format!("No user '{username}' found with given username."))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        if matches!(self, ApiError::Internal { .. }) {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let message_response = |status: StatusCode, message: String| {
            (status, Json(MessageBody { message })).into_response()
        };

        match self {
            ApiError::BadRequest { message, .. } | ApiError::Conflict { message, .. } => {
                message_response(StatusCode::BAD_REQUEST, message)
            }
            ApiError::ImageValidation {
                developer_message,
                user_message,
                ..
            } => (
                StatusCode::BAD_REQUEST,
                Json(ImageErrorBody {
                    developer_message,
                    user_message,
                }),
            )
                .into_response(),
            ApiError::NotFound { message, .. } => message_response(StatusCode::NOT_FOUND, message),
            ApiError::Unauthorized { message, .. } => {
                message_response(StatusCode::UNAUTHORIZED, message)
            }
            ApiError::Forbidden { message, .. } => message_response(StatusCode::FORBIDDEN, message),
            ApiError::Internal { message, .. } => {
                message_response(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

/// Convert core errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, .. } => ApiError::BadRequest { message, location },
            CoreError::IdentityNotFound { username, .. } => ApiError::NotFound {
                message: format!("No user '{username}' found with given username."),
                location,
            },
            CoreError::RetirementExists { username, .. } => ApiError::Conflict {
                message: format!("Retirement has already been requested for user '{username}'."),
                location,
            },
            // Store details were logged where they happened
            CoreError::Store { message, .. } => ApiError::Internal { message, location },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert image subsystem errors to API errors
impl From<MediaError> for ApiError {
    #[track_caller]
    fn from(e: MediaError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            MediaError::Validation(invalid) => ApiError::ImageValidation {
                developer_message: invalid.developer_message,
                user_message: invalid.user_message,
                location,
            },
            other => {
                log::error!("Profile image processing error: {}", other);
                ApiError::Internal {
                    message: "Profile image processing failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<ImageValidationError> for ApiError {
    #[track_caller]
    fn from(e: ImageValidationError) -> Self {
        ApiError::ImageValidation {
            developer_message: e.developer_message,
            user_message: e.user_message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        ApiError::BadRequest {
            message: format!("Malformed multipart body: {}", e.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    #[track_caller]
    fn from(e: tokio::task::JoinError) -> Self {
        log::error!("Blocking task failed: {}", e);
        ApiError::Internal {
            message: "Internal task failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
