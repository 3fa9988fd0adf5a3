use rooms_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown identifier or wrong password. Deliberately a single variant:
    /// callers must not be able to probe which accounts exist.
    #[error("Invalid username/email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// The callback's anti-forgery state token did not match the pending
    /// attempt (or there was no pending attempt). Fails closed.
    #[error("Login attempt state mismatch {location}")]
    InvalidState { location: ErrorLocation },

    /// The user declined consent at the provider
    #[error("Sign-in was cancelled at the identity provider {location}")]
    ProviderDenied { location: ErrorLocation },

    /// Network/protocol failure talking to the identity provider
    #[error("Identity provider exchange failed: {message} {location}")]
    ProviderExchange {
        message: String,
        location: ErrorLocation,
    },

    /// The provider's claims payload lacked a required claim
    #[error("Identity provider response is missing the '{claim}' claim {location}")]
    MissingIdentityClaims {
        claim: &'static str,
        location: ErrorLocation,
    },

    #[error("Session token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Session token rejected: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Session token could not be signed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid session claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("No authenticated session {location}")]
    Unauthenticated { location: ErrorLocation },
}

impl AuthError {
    /// Machine-readable code for client responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::InvalidState { .. } => "INVALID_STATE",
            Self::ProviderDenied { .. } => "PROVIDER_DENIED",
            Self::ProviderExchange { .. } => "PROVIDER_ERROR",
            Self::MissingIdentityClaims { .. } => "MISSING_IDENTITY_CLAIMS",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "INVALID_TOKEN",
            Self::JwtEncode { .. } => "INTERNAL_ERROR",
            Self::InvalidClaim { .. } => "INVALID_TOKEN",
            Self::RateLimitExceeded { .. } => "RATE_LIMITED",
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_state() -> Self {
        Self::InvalidState {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider_denied() -> Self {
        Self::ProviderDenied {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider_exchange<S: Into<String>>(message: S) -> Self {
        Self::ProviderExchange {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_claim(claim: &'static str) -> Self {
        Self::MissingIdentityClaims {
            claim,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
