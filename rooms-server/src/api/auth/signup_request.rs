use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Display name (required, not unique)
    pub username: String,

    /// Email address (required, unique across local accounts)
    pub email: String,

    pub password: String,

    /// Must match `password`
    pub confirm_password: String,
}
