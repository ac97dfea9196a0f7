pub mod identity;
pub mod profile_update;
pub mod retirement_request;
pub mod session;
pub mod user_profile;
