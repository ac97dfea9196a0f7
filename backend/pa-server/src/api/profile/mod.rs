pub mod profile;
pub mod update_profile_request;
