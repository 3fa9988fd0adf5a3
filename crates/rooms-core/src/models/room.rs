//! Room entity - a named group pointing at an external messaging link.

use crate::IdentityKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A joinable room, gated by a short numeric password.
///
/// The password is a plaintext 6-digit shared secret compared directly on
/// join. It is not an authentication credential and sits outside the auth
/// trust boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub password: String,
    /// External messaging-group URL handed out after a successful join
    pub link: String,
    pub creator_id: Uuid,
    pub creator_kind: IdentityKind,
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Create a new room stamped with its creator's identity
    pub fn new(
        name: String,
        password: String,
        link: String,
        creator_id: Uuid,
        creator_kind: IdentityKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            password,
            link,
            creator_id,
            creator_kind,
            created_at: Utc::now(),
        }
    }
}
