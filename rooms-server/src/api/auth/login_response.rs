use crate::IdentityDto;

use serde::Serialize;

/// Successful login response; the session rides in the Set-Cookie header
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub identity: IdentityDto,
    pub message: String,
}
