//! Identity store seam.
//!
//! Handlers never touch the database directly; they are given an
//! `Arc<dyn IdentityStore>` and always re-read before mutating.

use crate::{Identity, Result, RetirementRequest};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// All identities, ordered by id
    async fn list_all(&self) -> Result<Vec<Identity>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>>;

    /// Whether any stored identity currently uses `email` (case-insensitive)
    async fn exists_by_email(&self, email: &str) -> Result<bool>;

    /// Persist the identity and its profile together
    async fn save(&self, identity: &Identity) -> Result<()>;

    /// Set or clear the profile image timestamp.
    ///
    /// Fails with `CoreError::IdentityNotFound` when no identity has `username`.
    async fn set_profile_image_uploaded_at(
        &self,
        username: &str,
        uploaded_at: Option<DateTime<Utc>>,
    ) -> Result<()>;

    /// Open the all-or-nothing unit used by account retirement
    async fn begin_retirement(&self) -> Result<Box<dyn RetirementTransaction>>;
}

/// Explicit transactional boundary around retirement.
///
/// Dropping without `commit` discards every change.
#[async_trait]
pub trait RetirementTransaction: Send {
    /// Record the retirement request and deactivate the identity.
    ///
    /// Fails with `CoreError::RetirementExists` on a second request.
    async fn create_retirement_request_and_deactivate(
        &mut self,
        identity: &Identity,
    ) -> Result<RetirementRequest>;

    async fn commit(self: Box<Self>) -> Result<()>;

    async fn rollback(self: Box<Self>) -> Result<()>;
}
