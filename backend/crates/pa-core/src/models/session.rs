use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated browser/API session, keyed by its bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
