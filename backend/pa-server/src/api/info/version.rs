use crate::{SuccessResponse, VersionData};

use axum::Json;

/// GET /version/
pub async fn version() -> Json<SuccessResponse<VersionData>> {
    Json(SuccessResponse::new(VersionData {
        version: env!("CARGO_PKG_VERSION"),
    }))
}
