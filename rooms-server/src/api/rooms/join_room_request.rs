use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct JoinRoomRequest {
    pub password: String,
}
