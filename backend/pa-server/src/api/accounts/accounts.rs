//! Account deletion and administration REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, BearerToken, MessageData,
    SetStaffStatusRequest, SuccessResponse,
};

use pa_core::RetirementTransaction;
use pa_notify::{DeletionNotification, TemplateContext};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// GET /users/account/delete/
pub async fn delete_account_usage() -> Json<SuccessResponse<MessageData>> {
    Json(SuccessResponse::message("do POST req, pass username in url"))
}

/// POST /users/account/delete/
pub async fn delete_account_without_username() -> ApiResult<StatusCode> {
    log::warn!("Account deletion requested without a username");
    Err(ApiError::not_found("Username not specified."))
}

/// POST /users/account/delete/{username}/
///
/// Retirement, deactivation and the deletion notice succeed or fail
/// together. Sessions are ended only after the commit.
pub async fn delete_account(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(username): Path<String>,
) -> ApiResult<StatusCode> {
    let identity = state
        .identities
        .find_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::unknown_user(&username))?;

    // Composed up front so the write transaction is held only for the send
    let context = TemplateContext::base(
        &state.platform.platform_name,
        &state.platform.site_name,
        &state.platform.contact_email,
        &state.platform.lms_root_url,
    )
    .with_full_name(&identity.profile.name);
    let notification = DeletionNotification.personalize(
        &identity.email,
        identity.language.as_deref(),
        &state.platform.default_language,
        context,
    );

    let mut tx = state.identities.begin_retirement().await?;

    if let Err(e) = tx.create_retirement_request_and_deactivate(&identity).await {
        rollback(tx, &username).await;
        state.metrics.retirement_failed("request");
        return Err(e.into());
    }

    if let Err(e) = state.notifier.send(&notification).await {
        log::error!(
            "Error sending out deletion notification email for '{}': {}",
            username,
            e
        );
        rollback(tx, &username).await;
        state.metrics.retirement_failed("notification");
        return Err(ApiError::internal(e.reason()));
    }

    tx.commit().await?;
    state.metrics.account_retired();
    log::info!("Account '{}' retired and deactivated", username);

    end_sessions(&state, token.as_deref(), &username).await;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /users/account/admin/{username}/
pub async fn set_staff_status(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    Path(username): Path<String>,
    payload: Result<Json<SetStaffStatusRequest>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse<MessageData>>> {
    if !caller.is_staff {
        return Err(ApiError::forbidden(
            "You do not have permission to perform this action.",
        ));
    }

    let Json(req) = payload?;

    let is_staff = req
        .is_staff
        .ok_or_else(|| ApiError::bad_request("The 'is_staff' field is required."))?;

    let mut identity = state
        .identities
        .find_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::unknown_user(&username))?;

    identity.is_staff = is_staff;
    state.identities.save(&identity).await?;

    state.metrics.staff_status_changed();
    log::info!(
        "Staff status of '{}' set to {} by '{}'",
        username,
        is_staff,
        caller.username
    );

    Ok(Json(SuccessResponse::message(format!(
        "Staff status for user '{username}' set to {is_staff}."
    ))))
}

async fn rollback(tx: Box<dyn RetirementTransaction>, username: &str) {
    if let Err(e) = tx.rollback().await {
        log::error!("Failed to roll back retirement of '{}': {}", username, e);
    }
}

/// Log out the caller and every other session of the retired identity.
///
/// The retirement is already committed, so failures here are only logged.
async fn end_sessions(state: &AppState, caller_token: Option<&str>, username: &str) {
    if let Some(token) = caller_token
        && let Err(e) = state.sessions.delete(token).await
    {
        log::warn!("Failed to end caller session after retiring '{}': {}", username, e);
    }

    match state.sessions.delete_for_username(username).await {
        Ok(0) => {}
        Ok(count) => log::info!("Ended {} session(s) of retired user '{}'", count, username),
        Err(e) => log::warn!("Failed to end sessions of retired user '{}': {}", username, e),
    }
}
