use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    /// Room name (required)
    pub name: String,

    /// 6-digit join password (required)
    pub password: String,

    /// External messaging-group URL handed out after a successful join
    pub link: String,
}
