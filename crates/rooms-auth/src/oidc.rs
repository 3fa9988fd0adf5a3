//! OIDC authorization-code flow against a single external identity provider.
//!
//! One login attempt moves through: authorization redirect (with a fresh
//! anti-forgery state token), callback with an authorization code, a
//! server-to-server code exchange at the token endpoint, and an identity
//! claims fetch from the userinfo endpoint. Nothing the browser sends is
//! trusted except the code and the state token; a failed step ends the
//! attempt, and a new attempt starts over with a fresh state token so
//! authorization codes are never replayed.

use crate::{AuthError, Result as AuthErrorResult, password};

use rand::Rng;
use rand::distr::Alphanumeric;
use serde::Deserialize;

/// Length of the anti-forgery state token in characters
const STATE_TOKEN_LEN: usize = 32;

/// Static provider settings; endpoints come from the discovery document.
#[derive(Clone)]
pub struct OidcConfig {
    pub client_id: String,
    pub client_secret: String,
    /// URL of the provider's OIDC discovery document
    pub discovery_url: String,
    /// This service's registered callback URL
    pub redirect_url: String,
    /// Space-separated scopes, e.g. "openid email profile"
    pub scopes: String,
}

/// The subset of the discovery document this flow needs
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderMetadata {
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Raw userinfo payload; required claims are checked in `fetch_identity`
#[derive(Debug, Deserialize)]
struct RawUserInfo {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

/// Verified identity claims for one authenticated provider account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub subject: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

pub struct OidcClient {
    http: reqwest::Client,
    config: OidcConfig,
    metadata: ProviderMetadata,
}

impl OidcClient {
    /// Fetch the provider's discovery document and build a client.
    ///
    /// Runs once at startup; a provider that cannot be discovered means SSO
    /// login is unavailable for the whole process lifetime.
    pub async fn discover(config: OidcConfig) -> AuthErrorResult<Self> {
        let http = reqwest::Client::new();

        let metadata = http
            .get(&config.discovery_url)
            .send()
            .await
            .map_err(|e| AuthError::provider_exchange(format!("discovery request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| AuthError::provider_exchange(format!("discovery rejected: {}", e)))?
            .json::<ProviderMetadata>()
            .await
            .map_err(|e| {
                AuthError::provider_exchange(format!("discovery document malformed: {}", e))
            })?;

        Ok(Self {
            http,
            config,
            metadata,
        })
    }

    /// Fresh single-use anti-forgery state token for one login attempt
    pub fn generate_state() -> String {
        rand::rng()
            .sample_iter(Alphanumeric)
            .take(STATE_TOKEN_LEN)
            .map(char::from)
            .collect()
    }

    /// Constant-time comparison of the callback state against the pending
    /// attempt's token. Absence of either side fails closed.
    pub fn state_matches(expected: &str, presented: &str) -> bool {
        !expected.is_empty()
            && password::constant_time_eq(expected.as_bytes(), presented.as_bytes())
    }

    /// The provider authorization URL a login attempt redirects to
    pub fn authorization_url(&self, state: &str) -> AuthErrorResult<String> {
        let url = reqwest::Url::parse_with_params(
            &self.metadata.authorization_endpoint,
            &[
                ("response_type", "code"),
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_url.as_str()),
                ("scope", self.config.scopes.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| {
            AuthError::provider_exchange(format!("authorization endpoint malformed: {}", e))
        })?;

        Ok(url.into())
    }

    /// Map a provider callback `error` parameter to the attempt's outcome
    pub fn callback_error(error: &str) -> AuthError {
        if error == "access_denied" {
            AuthError::provider_denied()
        } else {
            AuthError::provider_exchange(format!("provider reported: {}", error))
        }
    }

    /// Run the server-to-server half of the flow: trade the authorization
    /// code for an access token, then fetch the identity claims.
    pub async fn authenticate(&self, code: &str) -> AuthErrorResult<IdentityClaims> {
        let token = self.exchange_code(code).await?;
        self.fetch_identity(&token.access_token).await
    }

    async fn exchange_code(&self, code: &str) -> AuthErrorResult<TokenResponse> {
        let response = self
            .http
            .post(&self.metadata.token_endpoint)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("redirect_uri", self.config.redirect_url.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AuthError::provider_exchange(format!("token request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AuthError::provider_exchange(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        response.json::<TokenResponse>().await.map_err(|e| {
            AuthError::provider_exchange(format!("token response malformed: {}", e))
        })
    }

    async fn fetch_identity(&self, access_token: &str) -> AuthErrorResult<IdentityClaims> {
        let response = self
            .http
            .get(&self.metadata.userinfo_endpoint)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::provider_exchange(format!("userinfo request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AuthError::provider_exchange(format!(
                "userinfo endpoint returned {}",
                response.status()
            )));
        }

        let raw = response.json::<RawUserInfo>().await.map_err(|e| {
            AuthError::provider_exchange(format!("userinfo response malformed: {}", e))
        })?;

        let subject = raw
            .sub
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AuthError::missing_claim("sub"))?;
        let email = raw
            .email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AuthError::missing_claim("email"))?;

        // The provider may omit the display name; fall back to the email
        // so the profile snapshot always has a label.
        let name = raw
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| email.clone());

        Ok(IdentityClaims {
            subject,
            email,
            name,
            picture: raw.picture.filter(|p| !p.is_empty()),
        })
    }
}
