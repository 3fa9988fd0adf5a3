//! Local account - registered with username/email/password.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user who registered directly with this service.
///
/// `email` is globally unique across local accounts. `password_digest` holds
/// the one-way hash of the password, never the plaintext. The record is
/// immutable after signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUser {
    pub id: Uuid,
    /// Display name, not required to be unique
    pub username: String,
    pub email: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}

impl LocalUser {
    /// Create a new local user from an already-hashed password
    pub fn new(username: String, email: String, password_digest: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_digest,
            created_at: Utc::now(),
        }
    }
}
