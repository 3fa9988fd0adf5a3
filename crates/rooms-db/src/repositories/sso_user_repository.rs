//! Repository for accounts authenticated by the external OIDC provider.

use crate::error::is_unique_violation_on;
use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use rooms_core::SsoUser;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct SsoUserRepository {
    pool: SqlitePool,
}

impl SsoUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_subject(&self, subject: &str) -> DbErrorResult<Option<SsoUser>> {
        let row = sqlx::query(
            r#"
                SELECT id, subject, email, name, picture, created_at, last_login_at
                FROM sso_users
                WHERE subject = ?
            "#,
        )
        .bind(subject)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_sso_user(&r)).transpose()
    }

    /// Create-or-refresh the record for a provider subject.
    ///
    /// A returning subject keeps its row: name, picture and last_login_at
    /// are updated in place and `is_new` is false. A first login inserts a
    /// fresh row with `is_new` true. The returned flag drives welcome vs.
    /// welcome-back messaging downstream.
    pub async fn upsert(
        &self,
        subject: &str,
        email: &str,
        name: &str,
        picture: Option<&str>,
    ) -> DbErrorResult<(SsoUser, bool)> {
        if let Some(existing) = self.find_by_subject(subject).await? {
            let refreshed = self.refresh_profile(existing, name, picture).await?;
            return Ok((refreshed, false));
        }

        let user = SsoUser::new(
            subject.to_string(),
            email.to_string(),
            name.to_string(),
            picture.map(str::to_string),
        );

        let insert = sqlx::query(
            r#"
                INSERT INTO sso_users (id, subject, email, name, picture, created_at, last_login_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.subject)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.picture)
        .bind(user.created_at.timestamp())
        .bind(user.last_login_at.timestamp())
        .execute(&self.pool)
        .await;

        match insert {
            Ok(_) => Ok((user, true)),
            // Lost the insert race to a concurrent first login for the same
            // subject: the row exists now, take the returning-user path.
            Err(e) if is_unique_violation_on(&e, "sso_users.subject") => {
                let existing = self.find_by_subject(subject).await?.ok_or_else(|| {
                    DbError::Initialization {
                        message: format!(
                            "sso_users row for subject vanished after unique violation: {}",
                            e
                        ),
                        location: rooms_core::ErrorLocation::from(std::panic::Location::caller()),
                    }
                })?;
                let refreshed = self.refresh_profile(existing, name, picture).await?;
                Ok((refreshed, false))
            }
            Err(e) if is_unique_violation_on(&e, "sso_users.email") => {
                Err(DbError::duplicate_email())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn refresh_profile(
        &self,
        existing: SsoUser,
        name: &str,
        picture: Option<&str>,
    ) -> DbErrorResult<SsoUser> {
        let now = Utc::now();

        sqlx::query(
            r#"
                UPDATE sso_users
                SET name = ?, picture = ?, last_login_at = ?
                WHERE subject = ?
            "#,
        )
        .bind(name)
        .bind(picture)
        .bind(now.timestamp())
        .bind(&existing.subject)
        .execute(&self.pool)
        .await?;

        Ok(SsoUser {
            name: name.to_string(),
            picture: picture.map(str::to_string),
            last_login_at: now,
            ..existing
        })
    }
}

fn map_sso_user(row: &SqliteRow) -> DbErrorResult<SsoUser> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let last_login_at: i64 = row.try_get("last_login_at")?;

    Ok(SsoUser {
        id: parse_uuid(&id, "sso_users.id")?,
        subject: row.try_get("subject")?,
        email: row.try_get("email")?,
        name: row.try_get("name")?,
        picture: row.try_get("picture")?,
        created_at: parse_timestamp(created_at, "sso_users.created_at")?,
        last_login_at: parse_timestamp(last_login_at, "sso_users.last_login_at")?,
    })
}
