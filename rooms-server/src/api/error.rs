//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses with
//! appropriate HTTP status codes. Raw store/provider errors are logged
//! server-side and never reach the caller.

use rooms_auth::AuthError;
use rooms_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "UNAUTHENTICATED", "DUPLICATE_EMAIL")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/malformed required field (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unknown identifier or wrong password (401); deliberately one answer
    /// for both so callers cannot enumerate accounts
    #[error("Invalid username/email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// No valid session on a protected operation (401)
    #[error("Authentication required {location}")]
    Unauthenticated { location: ErrorLocation },

    /// Signup email already registered (409)
    #[error("An account with that email already exists {location}")]
    DuplicateEmail { location: ErrorLocation },

    /// Anti-forgery state mismatch on the SSO callback (400)
    #[error("Login attempt state mismatch {location}")]
    InvalidState { location: ErrorLocation },

    /// The user declined consent at the identity provider (502)
    #[error("Sign-in was cancelled at the identity provider {location}")]
    ProviderDenied { location: ErrorLocation },

    /// Identity provider exchange failed (502)
    #[error("Sign-in with the identity provider failed {location}")]
    ProviderError { location: ErrorLocation },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// The backing store failed mid-operation (503)
    #[error("Store unavailable {location}")]
    StoreUnavailable { location: ErrorLocation },

    /// Too many authentication attempts (429)
    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimited {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Machine-readable code, also used as the SSO redirect error query
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::InvalidState { .. } => "INVALID_STATE",
            Self::ProviderDenied { .. } => "PROVIDER_DENIED",
            Self::ProviderError { .. } => "PROVIDER_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidState { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials { .. } | Self::Unauthenticated { .. } => {
                StatusCode::UNAUTHORIZED
            }
            Self::DuplicateEmail { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::ProviderDenied { .. } | Self::ProviderError { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let (message, field) = match &self {
            ApiError::Validation { message, field, .. } => (message.clone(), field.clone()),
            ApiError::NotFound { message, .. } => (message.clone(), None),
            ApiError::InvalidCredentials { .. } => {
                ("Invalid username/email or password".to_string(), None)
            }
            ApiError::Unauthenticated { .. } => ("Please log in first".to_string(), None),
            ApiError::DuplicateEmail { .. } => (
                "An account with that email already exists".to_string(),
                None,
            ),
            ApiError::InvalidState { .. } => {
                ("Login attempt expired, please try again".to_string(), None)
            }
            ApiError::ProviderDenied { .. } => (
                "Sign-in was cancelled at the identity provider".to_string(),
                None,
            ),
            ApiError::ProviderError { .. } => (
                "Sign-in with the identity provider failed".to_string(),
                None,
            ),
            ApiError::StoreUnavailable { .. } => {
                ("Service temporarily unavailable, try again".to_string(), None)
            }
            ApiError::RateLimited {
                limit, window_secs, ..
            } => (
                format!("Too many attempts ({} per {}s), slow down", limit, window_secs),
                None,
            ),
            ApiError::Internal { message, .. } => (message.clone(), None),
        };

        let body = ApiErrorBody {
            code: self.code().to_string(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert auth-core errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::InvalidCredentials { .. } => ApiError::InvalidCredentials { location },
            AuthError::Unauthenticated { .. }
            | AuthError::TokenExpired { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => ApiError::Unauthenticated { location },
            AuthError::InvalidState { .. } => ApiError::InvalidState { location },
            AuthError::ProviderDenied { .. } => ApiError::ProviderDenied { location },
            AuthError::ProviderExchange { .. } | AuthError::MissingIdentityClaims { .. } => {
                // Exchange details stay in the server log
                log::error!("Provider exchange failed: {}", e);
                ApiError::ProviderError { location }
            }
            AuthError::RateLimitExceeded {
                limit,
                window_secs,
                ..
            } => ApiError::RateLimited {
                limit,
                window_secs,
                location,
            },
            AuthError::JwtEncode { .. } => {
                log::error!("Session token signing failed: {}", e);
                ApiError::Internal {
                    message: "Session could not be issued".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::DuplicateEmail { .. } => ApiError::DuplicateEmail { location },
            DbError::Sqlx { .. } => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", e);
                ApiError::StoreUnavailable { location }
            }
            _ => {
                log::error!("Database error: {}", e);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        log::error!("Database error: {}", e);
        ApiError::StoreUnavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
