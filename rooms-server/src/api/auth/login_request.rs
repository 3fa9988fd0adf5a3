use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or email, matched exactly as stored
    pub identifier: String,

    pub password: String,
}
