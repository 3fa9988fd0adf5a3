use rooms_core::Room;

use serde::Serialize;

/// Room DTO for JSON serialization.
///
/// The join password and the external link are never listed; the link is
/// only revealed by a successful join.
#[derive(Debug, Serialize)]
pub struct RoomDto {
    pub id: String,
    pub name: String,
    pub creator_kind: String,
    pub created_at: i64,
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name,
            creator_kind: room.creator_kind.to_string(),
            created_at: room.created_at.timestamp(),
        }
    }
}
