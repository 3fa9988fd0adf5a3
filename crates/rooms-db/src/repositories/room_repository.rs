//! Repository for rooms.
//!
//! Rooms are glue-level plumbing around the auth core: handlers stamp the
//! creator's identity (id + kind) on insert and read it back verbatim.

use crate::repositories::{parse_timestamp, parse_uuid};
use crate::Result as DbErrorResult;

use rooms_core::{IdentityKind, Room};

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct RoomRepository {
    pool: SqlitePool,
}

impl RoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, room: &Room) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO rooms (id, name, password, link, creator_id, creator_kind, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(room.id.to_string())
        .bind(&room.name)
        .bind(&room.password)
        .bind(&room.link)
        .bind(room.creator_id.to_string())
        .bind(room.creator_kind.as_str())
        .bind(room.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Room>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, name, password, link, creator_id, creator_kind, created_at
                FROM rooms
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_room(&r)).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Room>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, password, link, creator_id, creator_kind, created_at
                FROM rooms
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_room).collect()
    }

    /// Case-insensitive substring match on the room name.
    pub async fn search_by_name(&self, query: &str) -> DbErrorResult<Vec<Room>> {
        let pattern = format!("%{}%", query);

        let rows = sqlx::query(
            r#"
                SELECT id, name, password, link, creator_id, creator_kind, created_at
                FROM rooms
                WHERE name LIKE ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_room).collect()
    }
}

fn map_room(row: &SqliteRow) -> DbErrorResult<Room> {
    let id: String = row.try_get("id")?;
    let creator_id: String = row.try_get("creator_id")?;
    let creator_kind: String = row.try_get("creator_kind")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Room {
        id: parse_uuid(&id, "rooms.id")?,
        name: row.try_get("name")?,
        password: row.try_get("password")?,
        link: row.try_get("link")?,
        creator_id: parse_uuid(&creator_id, "rooms.creator_id")?,
        creator_kind: IdentityKind::from_str(&creator_kind).map_err(|e| {
            crate::DbError::Initialization {
                message: format!("rooms.creator_kind is invalid: {}", e),
                location: rooms_core::ErrorLocation::from(std::panic::Location::caller()),
            }
        })?,
        created_at: parse_timestamp(created_at, "rooms.created_at")?,
    })
}
