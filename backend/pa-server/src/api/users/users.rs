//! User directory REST API handlers

use crate::{ApiResult, AppState, AuthenticatedUser, MessageData, SuccessResponse, UserSummaryDto};

use axum::{Json, extract::State};

/// GET /users/
pub async fn list_users(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
) -> ApiResult<Json<Vec<UserSummaryDto>>> {
    Ok(Json(user_directory(&state).await?))
}

/// GET /users/test/
pub async fn smoke_test() -> Json<SuccessResponse<MessageData>> {
    Json(SuccessResponse::message("Hello World!"))
}

/// Every identity as `{id, name}`, ordered by id
pub(crate) async fn user_directory(state: &AppState) -> ApiResult<Vec<UserSummaryDto>> {
    let identities = state.identities.list_all().await?;
    Ok(identities.into_iter().map(UserSummaryDto::from).collect())
}
