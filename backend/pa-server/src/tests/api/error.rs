use crate::ApiError;

use pa_core::{CoreError, ErrorLocation};
use pa_media::{ImageValidationError, MediaError};

use std::panic::Location;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_bad_request_returns_400_with_message() {
    let (status, json) = render(ApiError::bad_request("Username must be passed")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Username must be passed");
}

#[tokio::test]
async fn test_conflict_is_reported_as_400() {
    let (status, json) = render(ApiError::from(CoreError::RetirementExists {
        username: "alice".into(),
        location: ErrorLocation::from(Location::caller()),
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("alice"));
}

#[tokio::test]
async fn test_image_validation_carries_both_messages() {
    let (status, json) = render(ApiError::from(MediaError::from(ImageValidationError::new(
        "dev detail",
        "user text",
    ))))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["developer_message"], "dev detail");
    assert_eq!(json["user_message"], "user text");
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_identity_not_found_returns_404() {
    let (status, json) = render(ApiError::from(CoreError::IdentityNotFound {
        username: "ghost".into(),
        location: ErrorLocation::from(Location::caller()),
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "No user 'ghost' found with given username.");
}

#[tokio::test]
async fn test_store_error_does_not_leak_details() {
    let (status, json) = render(ApiError::from(CoreError::Store {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    }))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Database operation failed");
}

#[tokio::test]
async fn test_auth_errors_map_to_401_and_403() {
    let (unauthorized, _) = render(ApiError::unauthorized("Invalid token.")).await;
    let (forbidden, _) = render(ApiError::forbidden("nope")).await;

    assert_eq!(unauthorized, StatusCode::UNAUTHORIZED);
    assert_eq!(forbidden, StatusCode::FORBIDDEN);
}
