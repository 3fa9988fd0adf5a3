use crate::{AuthError, Result as AuthErrorResult};

use rooms_core::{Identity, IdentityKind};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed-shape session payload signed into the session token.
///
/// The subject is the identity's id; `kind` tags which credential table it
/// belongs to. Both are only ever written by the session manager's issue
/// entry points, never from caller-supplied data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identity id (UUID)
    pub sub: String,
    /// Which credential table `sub` points into
    pub kind: IdentityKind,
    /// Display label (username or SSO profile name)
    pub name: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl SessionClaims {
    /// Validate claim shape after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub",
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// The identity this session is bound to
    #[track_caller]
    pub fn identity(&self) -> AuthErrorResult<Identity> {
        let id = Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub",
            message: format!("sub is not a valid UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Identity {
            id,
            kind: self.kind,
            label: self.name.clone(),
        })
    }
}
