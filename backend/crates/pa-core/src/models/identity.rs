//! Identity entity - a platform user account with its profile.

use crate::UserProfile;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account as owned by the identity store.
///
/// `username` is the immutable lookup key. Handlers read the record,
/// patch fields and hand it back to the store's `save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Store-assigned id (0 until persisted)
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    /// Preferred locale code (e.g. "es-419"), if the user picked one
    pub language: Option<String>,
    pub profile: UserProfile,
}

impl Identity {
    /// Create a new, active, non-staff identity with an empty profile
    pub fn new(username: String, email: String) -> Self {
        Self {
            id: 0,
            username,
            email,
            is_staff: false,
            is_active: true,
            date_joined: Utc::now(),
            language: None,
            profile: UserProfile::default(),
        }
    }

    /// Whether a profile image set currently exists for this identity
    pub fn has_profile_image(&self) -> bool {
        self.profile.profile_image_uploaded_at.is_some()
    }
}
