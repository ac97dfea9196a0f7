//! Retirement request - the record that an identity has begun deactivation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const RETIRED_EMAIL_PREFIX: &str = "retired__user_";
pub const RETIRED_EMAIL_DOMAIN: &str = "retired.invalid";

/// Created once per identity; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementRequest {
    pub id: String,
    pub identity_id: i64,
    pub original_username: String,
    pub original_email: String,
    pub created_at: DateTime<Utc>,
}

/// Pseudo-address stored on a retired identity in place of its real email.
///
/// Derived from the lowercased original so the same email always maps to
/// the same retired address, and can never equal a deliverable one.
pub fn retired_email_for(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!("{RETIRED_EMAIL_PREFIX}{digest:x}@{RETIRED_EMAIL_DOMAIN}")
}
