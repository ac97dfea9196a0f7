use crate::{
    AppState, delete_account, delete_account_usage, delete_account_without_username,
    delete_profile_image, list_profile_image_users, list_users, set_staff_status, smoke_test,
    update_profile, update_profile_usage, upload_profile_image, version,
};

use pa_config::FeaturesConfig;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{MethodRouter, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Feature flag a route belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    Users,
    ProfileImages,
    Account,
    /// Registered regardless of flags
    Always,
}

impl RouteGroup {
    pub fn is_enabled(self, features: &FeaturesConfig) -> bool {
        match self {
            RouteGroup::Users => features.api_users,
            RouteGroup::ProfileImages => features.api_profile_images,
            RouteGroup::Account => features.api_account,
            RouteGroup::Always => true,
        }
    }
}

/// Every endpoint the service can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute {
    Users,
    UsersUpdate,
    UsersTest,
    UserImage,
    AccountDeleteUsage,
    AccountDelete,
    AccountAdmin,
    Version,
}

impl ApiRoute {
    pub const ALL: [ApiRoute; 8] = [
        ApiRoute::Users,
        ApiRoute::UsersUpdate,
        ApiRoute::UsersTest,
        ApiRoute::UserImage,
        ApiRoute::AccountDeleteUsage,
        ApiRoute::AccountDelete,
        ApiRoute::AccountAdmin,
        ApiRoute::Version,
    ];

    /// Path relative to the configured base path
    pub fn path(self) -> &'static str {
        match self {
            ApiRoute::Users => "/users/",
            ApiRoute::UsersUpdate => "/users/update/",
            ApiRoute::UsersTest => "/users/test/",
            ApiRoute::UserImage => "/users/image/{username}/",
            ApiRoute::AccountDeleteUsage => "/users/account/delete/",
            ApiRoute::AccountDelete => "/users/account/delete/{username}/",
            ApiRoute::AccountAdmin => "/users/account/admin/{username}/",
            ApiRoute::Version => "/version/",
        }
    }

    pub fn group(self) -> RouteGroup {
        match self {
            ApiRoute::Users | ApiRoute::UsersUpdate | ApiRoute::UsersTest => RouteGroup::Users,
            ApiRoute::UserImage => RouteGroup::ProfileImages,
            ApiRoute::AccountDeleteUsage | ApiRoute::AccountDelete | ApiRoute::AccountAdmin => {
                RouteGroup::Account
            }
            ApiRoute::Version => RouteGroup::Always,
        }
    }

    fn handlers(self) -> MethodRouter<AppState> {
        match self {
            ApiRoute::Users => get(list_users),
            ApiRoute::UsersUpdate => get(update_profile_usage).post(update_profile),
            ApiRoute::UsersTest => get(smoke_test),
            ApiRoute::UserImage => get(list_profile_image_users)
                .post(upload_profile_image)
                .delete(delete_profile_image),
            ApiRoute::AccountDeleteUsage => {
                get(delete_account_usage).post(delete_account_without_username)
            }
            ApiRoute::AccountDelete => post(delete_account),
            ApiRoute::AccountAdmin => post(set_staff_status),
            ApiRoute::Version => get(version),
        }
    }
}

/// Routes to register for the given flag state.
///
/// Evaluated once when the router is built; flipping a flag needs a restart.
pub fn active_routes(features: &FeaturesConfig) -> Vec<ApiRoute> {
    ApiRoute::ALL
        .into_iter()
        .filter(|route| route.group().is_enabled(features))
        .collect()
}

/// Build the application router with all enabled endpoints
pub fn build_router(state: AppState) -> Router {
    let api = active_routes(&state.features)
        .into_iter()
        .fold(Router::new(), |router, route| {
            log::debug!("Registering route {}{}", state.base_path, route.path());
            router.route(route.path(), route.handlers())
        })
        .layer(DefaultBodyLimit::max(state.max_body_bytes));

    // Nesting at "" is not allowed, an empty base path mounts at the root
    let base_path = state.base_path.clone();
    let app = if base_path.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(&base_path, api)
    };

    app
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
