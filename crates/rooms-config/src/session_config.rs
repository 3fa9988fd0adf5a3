use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_COOKIE_NAME, DEFAULT_SESSION_MAX_AGE_SECS,
    MIN_SESSION_SECRET_LEN,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// HS256 signing secret for session tokens. Required; no default.
    pub secret: Option<String>,
    pub cookie_name: String,
    pub max_age_secs: u64,
    /// Set the cookie's Secure attribute (TLS-only). Enable in production.
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            cookie_name: String::from(DEFAULT_SESSION_COOKIE_NAME),
            max_age_secs: DEFAULT_SESSION_MAX_AGE_SECS,
            secure: false,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.secret {
            None => {
                return Err(ConfigError::session(
                    "session.secret is required (set ROOMS_SESSION_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_SESSION_SECRET_LEN => {
                return Err(ConfigError::session(format!(
                    "session.secret must be at least {} characters, got {}",
                    MIN_SESSION_SECRET_LEN,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if self.cookie_name.is_empty() {
            return Err(ConfigError::session("session.cookie_name cannot be empty"));
        }

        if self.max_age_secs == 0 {
            return Err(ConfigError::session("session.max_age_secs must be > 0"));
        }

        Ok(())
    }
}
