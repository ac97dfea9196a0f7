pub mod api;
pub mod app_state;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        accounts::{
            delete_account, delete_account_usage, delete_account_without_username,
            set_staff_status,
        },
        set_staff_status_request::SetStaffStatusRequest,
    },
    envelope::{MessageData, SuccessBody, SuccessResponse, VersionData},
    error::ApiError,
    error::Result as ApiResult,
    extractors::{authenticated_user::AuthenticatedUser, bearer_token::BearerToken},
    images::images::{delete_profile_image, list_profile_image_users, upload_profile_image},
    info::version::version,
    profile::{
        profile::{update_profile, update_profile_usage},
        update_profile_request::UpdateProfileRequest,
    },
    users::{
        user_summary_dto::UserSummaryDto,
        users::{list_users, smoke_test},
    },
};
pub use app_state::AppState;
pub use metrics::Metrics;
pub use routes::{ApiRoute, RouteGroup, active_routes, build_router};

pub(crate) use api::users::users::user_directory;
