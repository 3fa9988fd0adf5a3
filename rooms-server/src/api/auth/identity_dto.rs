use rooms_core::Identity;

use serde::Serialize;

/// Identity DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: String,
    pub kind: String,
    pub name: String,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            kind: identity.kind.to_string(),
            name: identity.label,
        }
    }
}
