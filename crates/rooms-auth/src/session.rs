//! Session token issue and validation.
//!
//! A session is an HS256-signed token carrying [`SessionClaims`]. Issuing a
//! new token for a client context replaces the previous one wholesale; there
//! is no refresh or mutation path.

use crate::{AuthError, Result as AuthErrorResult, SessionClaims};

use rooms_core::{ErrorLocation, IdentityKind, LocalUser, SsoUser};

use std::panic::Location;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    max_age_secs: i64,
}

impl SessionManager {
    /// Create a manager signing with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], max_age_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            max_age_secs,
        }
    }

    pub fn max_age_secs(&self) -> i64 {
        self.max_age_secs
    }

    /// Issue a session bound to a local account
    #[track_caller]
    pub fn issue_local(&self, user: &LocalUser) -> AuthErrorResult<String> {
        self.issue(user.id, IdentityKind::Local, &user.username)
    }

    /// Issue a session bound to an SSO account
    #[track_caller]
    pub fn issue_sso(&self, user: &SsoUser) -> AuthErrorResult<String> {
        self.issue(user.id, IdentityKind::Sso, &user.name)
    }

    #[track_caller]
    fn issue(&self, id: Uuid, kind: IdentityKind, name: &str) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: id.to_string(),
            kind,
            name: name.to_string(),
            iat: now,
            exp: now + self.max_age_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Validate a session token and return its claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<SessionClaims> {
        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Additional claim-shape validation
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
