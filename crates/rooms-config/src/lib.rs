mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod oauth_config;
mod rate_limit_config;
mod server_config;
mod session_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use oauth_config::OAuthConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "rooms.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_SESSION_COOKIE_NAME: &str = "rooms_session";
const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 86400; // 24 hours
const MIN_SESSION_SECRET_LEN: usize = 32;
const DEFAULT_OAUTH_DISCOVERY_URL: &str =
    "https://accounts.google.com/.well-known/openid-configuration";
const DEFAULT_OAUTH_SCOPES: &str = "openid email profile";
const DEFAULT_OAUTH_REDIRECT_URL: &str = "http://localhost:5000/auth/google/callback";
const DEFAULT_RATE_LIMIT_MAX_ATTEMPTS: u32 = 120;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

#[cfg(test)]
mod tests;
