//! Retirement unit of work.
//!
//! Wraps an open SQLite transaction. Nothing written here is visible to
//! other connections until `commit`; dropping the value rolls back.

use crate::DbError;

use pa_core::{
    CoreError, Identity, Result as CoreResult, RetirementRequest, RetirementTransaction,
    retired_email_for,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{Sqlite, Transaction};
use uuid::Uuid;

pub struct SqliteRetirementTransaction {
    tx: Transaction<'static, Sqlite>,
}

impl SqliteRetirementTransaction {
    pub fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl RetirementTransaction for SqliteRetirementTransaction {
    async fn create_retirement_request_and_deactivate(
        &mut self,
        identity: &Identity,
    ) -> CoreResult<RetirementRequest> {
        let request = RetirementRequest {
            id: Uuid::new_v4().to_string(),
            identity_id: identity.id,
            original_username: identity.username.clone(),
            original_email: identity.email.clone(),
            created_at: Utc::now(),
        };

        let inserted = sqlx::query(
            r#"
                INSERT INTO retirement_requests (
                    id, user_id, original_username, original_email, created_at
                ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.id)
        .bind(request.identity_id)
        .bind(&request.original_username)
        .bind(&request.original_email)
        .bind(request.created_at.timestamp())
        .execute(&mut *self.tx)
        .await;

        match inserted {
            Ok(_) => {}
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(CoreError::RetirementExists {
                    username: identity.username.clone(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(DbError::from(e).into()),
        }

        let result = sqlx::query("UPDATE users SET is_active = 0, email = ? WHERE id = ?")
            .bind(retired_email_for(&identity.email))
            .bind(identity.id)
            .execute(&mut *self.tx)
            .await
            .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::IdentityNotFound {
                username: identity.username.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::debug!(
            "Retirement request {} created for user {}",
            request.id,
            request.original_username
        );

        Ok(request)
    }

    async fn commit(self: Box<Self>) -> CoreResult<()> {
        self.tx.commit().await.map_err(DbError::from)?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> CoreResult<()> {
        self.tx.rollback().await.map_err(DbError::from)?;
        Ok(())
    }
}
