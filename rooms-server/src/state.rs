use rooms_auth::{LoginRateLimiter, OidcClient, SessionManager};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Attributes stamped on every session cookie this server sets
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub max_age_secs: u64,
    /// TLS-only cookies; enable in production
    pub secure: bool,
}

/// Shared application state, one explicit handle per concern.
///
/// `oidc` is None when SSO is disabled; the SSO routes then answer 404.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: Arc<SessionManager>,
    pub oidc: Option<Arc<OidcClient>>,
    pub login_limiter: Arc<LoginRateLimiter>,
    pub cookies: CookieSettings,
}
