use crate::RoomDto;

use serde::Serialize;

/// Single room response
#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub room: RoomDto,
}
