//! Session repository.
//!
//! Sessions are issued by the hosting platform's login flow; this service
//! only looks them up and ends them.

use crate::Result as DbErrorResult;
use crate::repositories::identity_repository::timestamp_to_datetime;

use pa_core::Session;

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Issue a new session for `username` with a random token
    pub async fn create(&self, username: &str) -> DbErrorResult<Session> {
        let session = Session {
            token: Uuid::new_v4().simple().to_string(),
            username: username.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query("INSERT INTO sessions (token, username, created_at) VALUES (?, ?, ?)")
            .bind(&session.token)
            .bind(&session.username)
            .bind(session.created_at.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(session)
    }

    pub async fn find_by_token(&self, token: &str) -> DbErrorResult<Option<Session>> {
        let row = sqlx::query("SELECT token, username, created_at FROM sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| -> DbErrorResult<Session> {
            let created_at: i64 = r.try_get("created_at")?;
            Ok(Session {
                token: r.try_get("token")?,
                username: r.try_get("username")?,
                created_at: timestamp_to_datetime(created_at, "sessions.created_at")?,
            })
        })
        .transpose()
    }

    /// End one session; returns whether it existed
    pub async fn delete(&self, token: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// End every session of `username`; returns how many were removed
    pub async fn delete_for_username(&self, username: &str) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
