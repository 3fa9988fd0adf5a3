//! SSO account - signed in via the external OIDC provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user who signs in through the external identity provider.
///
/// `subject` is the provider's stable opaque account id and is unique per
/// provider account. The profile snapshot (`name`, `picture`) and
/// `last_login_at` are refreshed in place on every successful login; the
/// record is never duplicated for a returning subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoUser {
    pub id: Uuid,
    pub subject: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl SsoUser {
    /// Create a record for a first-time SSO login
    pub fn new(subject: String, email: String, name: String, picture: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject,
            email,
            name,
            picture,
            created_at: now,
            last_login_at: now,
        }
    }
}
