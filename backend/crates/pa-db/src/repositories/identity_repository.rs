//! Identity repository - users plus their profile rows.
//!
//! Timestamps are stored as unix seconds. A profile row always exists for
//! an identity created through `create`; `save` upserts it anyway so rows
//! inserted by other tools are handled.

use crate::{DbError, Result as DbErrorResult, SqliteRetirementTransaction};

use pa_core::{
    CoreError, Identity, IdentityStore, Result as CoreResult, RetirementTransaction, UserProfile,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_IDENTITY: &str = r#"
    SELECT u.id, u.username, u.email, u.is_staff, u.is_active, u.date_joined, u.language,
        p.name, p.gender, p.year_of_birth, p.level_of_education, p.country,
        p.phone_number, p.profile_image_uploaded_at
    FROM users u
    LEFT JOIN user_profiles p ON p.user_id = u.id
"#;

#[derive(Clone)]
pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity and its profile, returning it with its id
    pub async fn create(&self, identity: &Identity) -> DbErrorResult<Identity> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                INSERT INTO users (username, email, is_staff, is_active, date_joined, language)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&identity.username)
        .bind(&identity.email)
        .bind(identity.is_staff)
        .bind(identity.is_active)
        .bind(identity.date_joined.timestamp())
        .bind(&identity.language)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();
        Self::upsert_profile(&mut tx, id, &identity.profile).await?;
        tx.commit().await?;

        let mut created = identity.clone();
        created.id = id;
        Ok(created)
    }

    async fn upsert_profile(
        conn: &mut sqlx::SqliteConnection,
        user_id: i64,
        profile: &UserProfile,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO user_profiles (
                    user_id, name, gender, year_of_birth, level_of_education,
                    country, phone_number, profile_image_uploaded_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT (user_id) DO UPDATE SET
                    name = excluded.name,
                    gender = excluded.gender,
                    year_of_birth = excluded.year_of_birth,
                    level_of_education = excluded.level_of_education,
                    country = excluded.country,
                    phone_number = excluded.phone_number,
                    profile_image_uploaded_at = excluded.profile_image_uploaded_at
            "#,
        )
        .bind(user_id)
        .bind(&profile.name)
        .bind(&profile.gender)
        .bind(profile.year_of_birth)
        .bind(&profile.level_of_education)
        .bind(&profile.country)
        .bind(&profile.phone_number)
        .bind(profile.profile_image_uploaded_at.map(|dt| dt.timestamp()))
        .execute(conn)
        .await?;

        Ok(())
    }

    fn identity_from_row(row: &SqliteRow) -> DbErrorResult<Identity> {
        let date_joined: i64 = row.try_get("date_joined")?;
        let uploaded_at: Option<i64> = row.try_get("profile_image_uploaded_at")?;

        Ok(Identity {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            is_staff: row.try_get("is_staff")?,
            is_active: row.try_get("is_active")?,
            date_joined: timestamp_to_datetime(date_joined, "users.date_joined")?,
            language: row.try_get("language")?,
            profile: UserProfile {
                name: row
                    .try_get::<Option<String>, _>("name")?
                    .unwrap_or_default(),
                gender: row.try_get("gender")?,
                year_of_birth: row.try_get("year_of_birth")?,
                level_of_education: row.try_get("level_of_education")?,
                country: row.try_get("country")?,
                phone_number: row.try_get("phone_number")?,
                profile_image_uploaded_at: uploaded_at
                    .map(|ts| {
                        timestamp_to_datetime(ts, "user_profiles.profile_image_uploaded_at")
                    })
                    .transpose()?,
            },
        })
    }
}

#[track_caller]
pub(crate) fn timestamp_to_datetime(ts: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[async_trait]
impl IdentityStore for IdentityRepository {
    async fn list_all(&self) -> CoreResult<Vec<Identity>> {
        let rows = sqlx::query(&format!("{SELECT_IDENTITY} ORDER BY u.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::from)?;

        let identities = rows
            .iter()
            .map(Self::identity_from_row)
            .collect::<DbErrorResult<Vec<_>>>()?;

        Ok(identities)
    }

    async fn find_by_username(&self, username: &str) -> CoreResult<Option<Identity>> {
        let row = sqlx::query(&format!("{SELECT_IDENTITY} WHERE u.username = ?"))
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(row.as_ref().map(Self::identity_from_row).transpose()?)
    }

    async fn exists_by_email(&self, email: &str) -> CoreResult<bool> {
        let exists: i64 = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM users WHERE email = ? COLLATE NOCASE)",
        )
        .bind(email.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(exists != 0)
    }

    async fn save(&self, identity: &Identity) -> CoreResult<()> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        let result = sqlx::query(
            r#"
                UPDATE users
                SET email = ?, is_staff = ?, is_active = ?, language = ?
                WHERE id = ?
            "#,
        )
        .bind(&identity.email)
        .bind(identity.is_staff)
        .bind(identity.is_active)
        .bind(&identity.language)
        .bind(identity.id)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::IdentityNotFound {
                username: identity.username.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Self::upsert_profile(&mut tx, identity.id, &identity.profile).await?;
        tx.commit().await.map_err(DbError::from)?;

        Ok(())
    }

    async fn set_profile_image_uploaded_at(
        &self,
        username: &str,
        uploaded_at: Option<DateTime<Utc>>,
    ) -> CoreResult<()> {
        let user_id: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?;

        let user_id = user_id.ok_or_else(|| CoreError::IdentityNotFound {
            username: username.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        sqlx::query(
            r#"
                INSERT INTO user_profiles (user_id, profile_image_uploaded_at) VALUES (?, ?)
                ON CONFLICT (user_id) DO UPDATE SET
                    profile_image_uploaded_at = excluded.profile_image_uploaded_at
            "#,
        )
        .bind(user_id)
        .bind(uploaded_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(())
    }

    async fn begin_retirement(&self) -> CoreResult<Box<dyn RetirementTransaction>> {
        let tx = self.pool.begin().await.map_err(DbError::from)?;
        Ok(Box::new(SqliteRetirementTransaction::new(tx)))
    }
}
