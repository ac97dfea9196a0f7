use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile sub-record of an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full display name
    pub name: String,
    pub gender: Option<String>,
    pub year_of_birth: Option<i32>,
    pub level_of_education: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    /// Set while a profile image set exists
    pub profile_image_uploaded_at: Option<DateTime<Utc>>,
}
