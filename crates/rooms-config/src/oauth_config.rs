use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_OAUTH_DISCOVERY_URL, DEFAULT_OAUTH_REDIRECT_URL,
    DEFAULT_OAUTH_SCOPES,
};

use serde::Deserialize;

/// External identity provider (OIDC) settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OAuthConfig {
    /// When false, the SSO login routes are disabled entirely
    pub enabled: bool,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub discovery_url: String,
    /// This service's registered callback URL
    pub redirect_url: String,
    pub scopes: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            client_id: None,
            client_secret: None,
            discovery_url: String::from(DEFAULT_OAUTH_DISCOVERY_URL),
            redirect_url: String::from(DEFAULT_OAUTH_REDIRECT_URL),
            scopes: String::from(DEFAULT_OAUTH_SCOPES),
        }
    }
}

impl OAuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.client_id.as_deref().unwrap_or("").is_empty() {
            return Err(ConfigError::oauth(
                "oauth.client_id is required when oauth is enabled \
                 (set ROOMS_OAUTH_CLIENT_ID or GOOGLE_CLIENT_ID)",
            ));
        }

        if self.client_secret.as_deref().unwrap_or("").is_empty() {
            return Err(ConfigError::oauth(
                "oauth.client_secret is required when oauth is enabled \
                 (set ROOMS_OAUTH_CLIENT_SECRET or GOOGLE_CLIENT_SECRET)",
            ));
        }

        if self.discovery_url.is_empty() {
            return Err(ConfigError::oauth("oauth.discovery_url cannot be empty"));
        }

        if self.redirect_url.is_empty() {
            return Err(ConfigError::oauth("oauth.redirect_url cannot be empty"));
        }

        if !self.scopes.split_whitespace().any(|s| s == "openid") {
            return Err(ConfigError::oauth(
                "oauth.scopes must include the 'openid' scope",
            ));
        }

        Ok(())
    }
}
