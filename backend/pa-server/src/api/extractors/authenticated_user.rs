//! Axum extractors for REST API authentication

use crate::{ApiError, AppState, api::extractors::bearer_token::bearer_token};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const ANONYMOUS_USERNAME: &str = "anonymous";

/// The caller behind a request.
///
/// Resolves the bearer token to a session and the session to an active
/// identity. With authentication disabled every caller is an anonymous
/// staff user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
    pub is_staff: bool,
}

impl AuthenticatedUser {
    fn anonymous() -> Self {
        Self {
            username: ANONYMOUS_USERNAME.to_string(),
            is_staff: true,
        }
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if !state.auth_enabled {
                log::debug!("Authentication disabled, using anonymous caller");
                return Ok(AuthenticatedUser::anonymous());
            }

            let token = bearer_token(&parts.headers).ok_or_else(|| {
                ApiError::unauthorized("Authentication credentials were not provided.")
            })?;

            let session = state
                .sessions
                .find_by_token(&token)
                .await?
                .ok_or_else(|| ApiError::unauthorized("Invalid token."))?;

            let identity = state
                .identities
                .find_by_username(&session.username)
                .await?
                .filter(|identity| identity.is_active)
                .ok_or_else(|| ApiError::unauthorized("User inactive or deleted."))?;

            Ok(AuthenticatedUser {
                username: identity.username,
                is_staff: identity.is_staff,
            })
        }
    }
}
