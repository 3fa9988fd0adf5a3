//! Set-Cookie header construction.
//!
//! Session and state cookies are HTTP-only and SameSite=Lax; the Secure
//! attribute follows configuration so local HTTP development still works.

use crate::state::CookieSettings;

/// Cookie carrying the anti-forgery state token during an SSO attempt
pub(crate) const STATE_COOKIE_NAME: &str = "rooms_oauth_state";

/// The state cookie only needs to survive the provider round-trip
const STATE_COOKIE_MAX_AGE_SECS: u64 = 600;

fn secure_flag(settings: &CookieSettings) -> &'static str {
    if settings.secure { " Secure;" } else { "" }
}

pub fn session_cookie(settings: &CookieSettings, token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax;{} Max-Age={}",
        settings.name,
        token,
        secure_flag(settings),
        settings.max_age_secs
    )
}

/// Clearing an absent cookie is harmless, which makes logout idempotent
pub fn clear_session_cookie(settings: &CookieSettings) -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax;{} Max-Age=0",
        settings.name,
        secure_flag(settings)
    )
}

pub fn state_cookie(settings: &CookieSettings, state: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax;{} Max-Age={}",
        STATE_COOKIE_NAME,
        state,
        secure_flag(settings),
        STATE_COOKIE_MAX_AGE_SECS
    )
}

/// Cleared on every callback so the state token is single-use
pub fn clear_state_cookie(settings: &CookieSettings) -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax;{} Max-Age=0",
        STATE_COOKIE_NAME,
        secure_flag(settings)
    )
}
