use crate::{
    ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, OAuthConfig, RateLimitConfig,
    ServerConfig, SessionConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub oauth: OAuthConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for ROOMS_CONFIG_DIR env var, else use ./.rooms/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ROOMS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ROOMS_CONFIG_DIR env var > ./.rooms/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("ROOMS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".rooms"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.session.validate()?;
        self.oauth.validate()?;
        self.rate_limit.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  session: cookie '{}', max-age {}s, secure {}",
            self.session.cookie_name, self.session.max_age_secs, self.session.secure
        );
        info!(
            "  oauth: {} ({})",
            if self.oauth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.oauth.discovery_url
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_attempts, self.rate_limit.window_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("ROOMS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("ROOMS_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("ROOMS_DATABASE_PATH", &mut self.database.path);

        // Session
        Self::apply_env_option_string("ROOMS_SESSION_SECRET", &mut self.session.secret);
        Self::apply_env_string("ROOMS_SESSION_COOKIE_NAME", &mut self.session.cookie_name);
        Self::apply_env_parse("ROOMS_SESSION_MAX_AGE_SECS", &mut self.session.max_age_secs);
        Self::apply_env_bool("ROOMS_SESSION_SECURE", &mut self.session.secure);

        // OAuth. The GOOGLE_* names are accepted as fallbacks so credentials
        // provisioned for the provider console work unchanged.
        Self::apply_env_bool("ROOMS_OAUTH_ENABLED", &mut self.oauth.enabled);
        Self::apply_env_option_string("ROOMS_OAUTH_CLIENT_ID", &mut self.oauth.client_id);
        if self.oauth.client_id.is_none() {
            Self::apply_env_option_string("GOOGLE_CLIENT_ID", &mut self.oauth.client_id);
        }
        Self::apply_env_option_string("ROOMS_OAUTH_CLIENT_SECRET", &mut self.oauth.client_secret);
        if self.oauth.client_secret.is_none() {
            Self::apply_env_option_string("GOOGLE_CLIENT_SECRET", &mut self.oauth.client_secret);
        }
        Self::apply_env_string("ROOMS_OAUTH_DISCOVERY_URL", &mut self.oauth.discovery_url);
        Self::apply_env_string("ROOMS_OAUTH_REDIRECT_URL", &mut self.oauth.redirect_url);
        Self::apply_env_string("ROOMS_OAUTH_SCOPES", &mut self.oauth.scopes);

        // Logging
        Self::apply_env_parse("ROOMS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ROOMS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ROOMS_LOG_FILE", &mut self.logging.file);

        // Rate limit
        Self::apply_env_parse(
            "ROOMS_RATE_LIMIT_MAX_ATTEMPTS",
            &mut self.rate_limit.max_attempts,
        );
        Self::apply_env_parse(
            "ROOMS_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(value) = std::env::var(key) {
            if !value.is_empty() {
                *target = value;
            }
        }
    }

    fn apply_env_option_string(key: &str, target: &mut Option<String>) {
        if let Ok(value) = std::env::var(key) {
            if !value.is_empty() {
                *target = Some(value);
            }
        }
    }

    fn apply_env_bool(key: &str, target: &mut bool) {
        if let Ok(value) = std::env::var(key) {
            match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => *target = true,
                "0" | "false" | "no" => *target = false,
                other => warn!("Ignoring {}: cannot parse '{}' as bool", key, other),
            }
        }
    }

    fn apply_env_parse<T: FromStr>(key: &str, target: &mut T) {
        if let Ok(value) = std::env::var(key) {
            match value.parse::<T>() {
                Ok(parsed) => *target = parsed,
                Err(_) => warn!("Ignoring {}: cannot parse '{}'", key, value),
            }
        }
    }
}
