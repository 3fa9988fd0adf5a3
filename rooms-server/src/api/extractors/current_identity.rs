//! Axum extractor gating protected operations on an active session

use crate::ApiError;
use crate::state::AppState;

use rooms_core::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::header::COOKIE, http::request::Parts};

/// Extracts the authenticated identity from the session cookie.
///
/// Rejects with 401 when the cookie is absent, the token fails validation,
/// or the claims are malformed. Performs no store calls: the signed token is
/// the entire proof of authentication.
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let cookie_header = parts
                .headers
                .get(COOKIE)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(ApiError::unauthenticated)?;

            let token = token_from_cookie_header(cookie_header, &state.cookies.name)
                .ok_or_else(ApiError::unauthenticated)?;

            let claims = state.sessions.validate(token).map_err(|e| {
                log::debug!("Session validation failed: {}", e);
                ApiError::unauthenticated()
            })?;

            let identity = claims.identity().map_err(|e| {
                log::debug!("Session claims malformed: {}", e);
                ApiError::unauthenticated()
            })?;

            Ok(CurrentIdentity(identity))
        }
    }
}

/// Pull a named cookie's value out of a Cookie header
pub(crate) fn token_from_cookie_header<'a>(
    cookie_header: &'a str,
    cookie_name: &str,
) -> Option<&'a str> {
    cookie_header.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        if name.trim() == cookie_name {
            Some(value.trim())
        } else {
            None
        }
    })
}
