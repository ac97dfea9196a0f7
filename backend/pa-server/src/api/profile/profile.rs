//! Profile update REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, MessageData, SuccessResponse,
    UpdateProfileRequest,
};

use pa_core::get_name_validation_error;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// GET /users/update/
pub async fn update_profile_usage(_caller: AuthenticatedUser) -> ApiResult<()> {
    Err(ApiError::bad_request(
        "Username must be passed to update the profile and use method as POST.",
    ))
}

/// POST /users/update/
pub async fn update_profile(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse<MessageData>>> {
    let Json(req) = payload?;

    // 1. Username is the lookup key and must come first
    let username = req
        .username
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::bad_request("Username must be passed to update the profile."))?;
    let update = req.update;

    // 2. Load the current record
    let mut identity = state
        .identities
        .find_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::unknown_user(&username))?;

    // 3. A changed email must not belong to anyone else
    if let Some(email) = update.new_email(&identity)
        && state.identities.exists_by_email(email).await?
    {
        return Err(ApiError::bad_request(format!(
            "An account with the email ID: '{email}' already exists."
        )));
    }

    // 4. Validate the display name the identity will end up with
    if let Some(message) = get_name_validation_error(update.resulting_name(&identity)) {
        return Err(ApiError::bad_request(message));
    }

    // 5. Apply and persist identity + profile together
    update.apply_to(&mut identity);
    state.identities.save(&identity).await?;

    state.metrics.profile_updated();
    log::info!("Profile of '{}' updated by '{}'", username, caller.username);

    Ok(Json(SuccessResponse::message(format!(
        "Profile updated successfully for user '{username}'."
    ))))
}
