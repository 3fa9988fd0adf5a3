use crate::IdentityDto;

use serde::Serialize;

/// The identity bound to the caller's active session
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub identity: IdentityDto,
}
