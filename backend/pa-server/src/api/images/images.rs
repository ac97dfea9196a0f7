//! Profile image REST API handlers
//!
//! Decoding, resizing and file IO run on the blocking pool.

use crate::{ApiResult, AppState, AuthenticatedUser, UserSummaryDto, user_directory};

use pa_core::make_upload_dt;
use pa_media::{ImageValidationError, ProfileImageNames, UploadedImage};

use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    http::StatusCode,
};

const FILE_FIELD: &str = "file";
const NO_FILE_MESSAGE: &str = "No file provided for profile image";

/// GET /users/image/{username}/
pub async fn list_profile_image_users(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<UserSummaryDto>>> {
    log::info!("Profile image listing requested for '{}'", username);
    Ok(Json(user_directory(&state).await?))
}

/// POST /users/image/{username}/
pub async fn upload_profile_image(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(username): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<StatusCode> {
    // 1. Find the `file` part; a body that is not multipart has none
    let Some(upload) = read_file_part(multipart).await? else {
        return Err(ImageValidationError::both(NO_FILE_MESSAGE).into());
    };

    // 2-5. Spool, validate, derive names, generate variants
    let images = state.images.clone();
    let key = username.clone();
    let generated = tokio::task::spawn_blocking(move || -> pa_media::Result<ProfileImageNames> {
        let upload = UploadedImage::from_bytes(upload.file_name, upload.content_type, &upload.data)?;
        images.validate(&upload)?;

        let names = images.names(&key);
        images.create(&upload, &names)?;
        Ok(names)
    })
    .await?;

    let names = match generated {
        Ok(names) => names,
        Err(e) => {
            if matches!(e, pa_media::MediaError::Validation(_)) {
                state.metrics.image_rejected();
            }
            return Err(e.into());
        }
    };

    // 6. Flag the identity; undo the files if that fails
    let uploaded_at = make_upload_dt(state.clock.as_ref());
    if let Err(e) = state
        .identities
        .set_profile_image_uploaded_at(&username, Some(uploaded_at))
        .await
    {
        remove_images(&state, names.clone()).await?;
        return Err(e.into());
    }

    // 7. Log and answer
    log::info!(
        "Generated and uploaded images {:?} for user {}",
        names.values().collect::<Vec<_>>(),
        username
    );
    state.metrics.images_uploaded();

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /users/image/{username}/
pub async fn delete_profile_image(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(username): Path<String>,
) -> ApiResult<StatusCode> {
    // Unknown username surfaces as 404
    state
        .identities
        .set_profile_image_uploaded_at(&username, None)
        .await?;

    let names = state.images.names(&username);
    remove_images(&state, names.clone()).await?;

    log::info!(
        "Deleted images {:?} for user {}",
        names.values().collect::<Vec<_>>(),
        username
    );
    state.metrics.images_deleted();

    Ok(StatusCode::NO_CONTENT)
}

/// The `file` part of an upload, buffered in memory (bounded by the body limit)
struct FilePart {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

async fn read_file_part(
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Option<FilePart>> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            log::debug!("Upload without multipart body: {}", rejection.body_text());
            return Ok(None);
        }
    };

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?.to_vec();
        return Ok(Some(FilePart {
            file_name,
            content_type,
            data,
        }));
    }

    Ok(None)
}

async fn remove_images(state: &AppState, names: ProfileImageNames) -> ApiResult<()> {
    let images = state.images.clone();
    tokio::task::spawn_blocking(move || images.remove(&names)).await??;
    Ok(())
}
