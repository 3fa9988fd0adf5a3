use crate::RoomDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RoomListResponse {
    pub rooms: Vec<RoomDto>,
}
