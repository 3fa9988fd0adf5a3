use serde::Serialize;

/// A successful join reveals the room's external messaging link
#[derive(Debug, Serialize)]
pub struct JoinRoomResponse {
    pub link: String,
}
