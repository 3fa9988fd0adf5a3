//! Repository for local (username/email + password) accounts.

use crate::error::is_unique_violation_on;
use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use rooms_core::LocalUser;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new local account.
    ///
    /// The store's unique constraint on `users.email` is the single arbiter
    /// of duplicates: concurrent signups with the same email race on it and
    /// the loser observes `DbError::DuplicateEmail`.
    pub async fn create(&self, user: &LocalUser) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (id, username, email, password_digest, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_digest)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, "users.email") {
                DbError::duplicate_email()
            } else {
                e.into()
            }
        })?;

        Ok(())
    }

    /// Look up an account by username OR email, exact match as stored.
    ///
    /// Usernames are not unique; ties resolve to the earliest-created row so
    /// the same identifier always yields the same account.
    pub async fn find_by_identifier(&self, identifier: &str) -> DbErrorResult<Option<LocalUser>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, email, password_digest, created_at
                FROM users
                WHERE username = ? OR email = ?
                ORDER BY created_at ASC, id ASC
                LIMIT 1
            "#,
        )
        .bind(identifier)
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<LocalUser>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, username, email, password_digest, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }
}

fn map_user(row: &SqliteRow) -> DbErrorResult<LocalUser> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(LocalUser {
        id: parse_uuid(&id, "users.id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        password_digest: row.try_get("password_digest")?,
        created_at: parse_timestamp(created_at, "users.created_at")?,
    })
}
