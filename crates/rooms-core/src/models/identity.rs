//! The authenticated principal carried by a session.

use crate::{IdentityKind, LocalUser, SsoUser};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated identity: one id, tagged with the table it lives in.
///
/// Downstream code (room creation, ownership stamps) reads `id` + `kind`
/// and never needs to special-case the two credential tables beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub kind: IdentityKind,
    /// Display label shown to the user (username or SSO profile name)
    pub label: String,
}

impl From<&LocalUser> for Identity {
    fn from(user: &LocalUser) -> Self {
        Self {
            id: user.id,
            kind: IdentityKind::Local,
            label: user.username.clone(),
        }
    }
}

impl From<&SsoUser> for Identity {
    fn from(user: &SsoUser) -> Self {
        Self {
            id: user.id,
            kind: IdentityKind::Sso,
            label: user.name.clone(),
        }
    }
}
