use serde::Serialize;

/// Response for a successful signup; no session is issued - the caller
/// logs in next.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub message: String,
}
