pub mod clock;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock, make_upload_dt};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::identity::Identity;
pub use models::profile_update::ProfileUpdate;
pub use models::retirement_request::{RetirementRequest, retired_email_for};
pub use models::session::Session;
pub use models::user_profile::UserProfile;
pub use store::identity_store::{IdentityStore, RetirementTransaction};
pub use validation::name_validator::{
    INVALID_NAME_MESSAGE, NAME_MAX_LENGTH, NAME_TOO_LONG_MESSAGE, get_name_validation_error,
};
