mod identity;
mod profile_update;
mod retirement_request;
