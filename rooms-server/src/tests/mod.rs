mod api;

use crate::routes::build_router;
use crate::state::{AppState, CookieSettings};

use rooms_auth::{LoginRateLimiter, OidcClient, RateLimitConfig, SessionManager};

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use http::header::SET_COOKIE;

pub(crate) const TEST_SESSION_COOKIE: &str = "rooms_session";

/// App state backed by a fresh in-memory database. The rate limiter quota is
/// high enough that tests never trip it; rate limiting has its own coverage
/// in rooms-auth.
pub(crate) async fn test_state(oidc: Option<Arc<OidcClient>>) -> AppState {
    let pool = rooms_db::create_memory_pool()
        .await
        .expect("Failed to create test pool");

    AppState {
        pool,
        sessions: Arc::new(SessionManager::with_hs256(
            b"test-secret-key-at-least-32-bytes",
            86400,
        )),
        oidc,
        login_limiter: Arc::new(LoginRateLimiter::new(RateLimitConfig {
            max_attempts: 60_000,
            window_secs: 60,
        })),
        cookies: CookieSettings {
            name: TEST_SESSION_COOKIE.to_string(),
            max_age_secs: 86400,
            secure: false,
        },
    }
}

pub(crate) async fn test_server(oidc: Option<Arc<OidcClient>>) -> (TestServer, AppState) {
    let state = test_state(oidc).await;
    let server = TestServer::new(build_router(state.clone())).expect("Failed to start test server");
    (server, state)
}

/// The value of the first Set-Cookie header matching `name`, if any
pub(crate) fn extract_cookie(response: &TestResponse, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    let headers = response.headers();

    for value in headers.get_all(SET_COOKIE) {
        if let Ok(raw) = value.to_str() {
            if let Some(rest) = raw.strip_prefix(&prefix) {
                return Some(rest.split(';').next().unwrap_or("").to_string());
            }
        }
    }

    None
}

pub(crate) fn cookie_header(name: &str, value: &str) -> String {
    format!("{}={}", name, value)
}
