use crate::tests::create_test_state;
use crate::{ApiError, AppState, AuthenticatedUser, BearerToken};

use pa_core::{Identity, IdentityStore};
use pa_db::IdentityRepository;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, request::Parts},
};

fn parts(authorization: Option<&str>) -> Parts {
    let mut builder = Request::builder();
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap().into_parts().0
}

async fn extract_user(
    state: &AppState,
    authorization: Option<&str>,
) -> Result<AuthenticatedUser, ApiError> {
    AuthenticatedUser::from_request_parts(&mut parts(authorization), state).await
}

async fn extract_token(authorization: Option<&str>) -> Option<String> {
    BearerToken::from_request_parts(&mut parts(authorization), &())
        .await
        .unwrap()
        .0
}

async fn create_identity(state: &AppState, username: &str, is_staff: bool) -> Identity {
    let mut identity = Identity::new(username.to_string(), format!("{username}@example.com"));
    identity.is_staff = is_staff;
    IdentityRepository::new(state.pool.clone())
        .create(&identity)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_bearer_token_parsing() {
    assert_eq!(extract_token(Some("Bearer abc123")).await, Some("abc123".to_string()));
    assert_eq!(extract_token(Some("bearer  abc123 ")).await, Some("abc123".to_string()));
    assert_eq!(extract_token(Some("Basic dXNlcjpwYXNz")).await, None);
    assert_eq!(extract_token(Some("Bearer ")).await, None);
    assert_eq!(extract_token(None).await, None);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (state, _dir) = create_test_state(true).await;

    let result = extract_user(&state, None).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let (state, _dir) = create_test_state(true).await;

    let result = extract_user(&state, Some("Bearer not-a-session")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_valid_session_resolves_identity() {
    let (state, _dir) = create_test_state(true).await;
    create_identity(&state, "alice", true).await;
    let session = state.sessions.create("alice").await.unwrap();

    let user = extract_user(&state, Some(&format!("Bearer {}", session.token)))
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert!(user.is_staff);
}

#[tokio::test]
async fn test_inactive_identity_is_unauthorized() {
    let (state, _dir) = create_test_state(true).await;
    let mut identity = create_identity(&state, "bob", false).await;
    identity.is_active = false;
    state.identities.save(&identity).await.unwrap();
    let session = state.sessions.create("bob").await.unwrap();

    let result = extract_user(&state, Some(&format!("Bearer {}", session.token))).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_auth_disabled_yields_anonymous_staff() {
    let (state, _dir) = create_test_state(false).await;

    let user = extract_user(&state, None).await.unwrap();

    assert_eq!(user.username, "anonymous");
    assert!(user.is_staff);
}
