use rooms_server::{build_router, logger, state::{AppState, CookieSettings}};

use rooms_auth::{LoginRateLimiter, OidcClient, OidcConfig, RateLimitConfig, SessionManager};

use std::error::Error;
use std::sync::Arc;

use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = rooms_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = rooms_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting rooms-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and run migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = rooms_db::connect(&database_path).await?;

    info!("Database connection established");

    // Session manager; validate() guarantees the secret is present
    let secret = config
        .session
        .secret
        .clone()
        .ok_or_else(|| rooms_config::ConfigError::session("session.secret is required"))?;
    let sessions = Arc::new(SessionManager::with_hs256(
        secret.as_bytes(),
        config.session.max_age_secs as i64,
    ));

    // OIDC client; discovery runs once at startup
    let oidc = if config.oauth.enabled {
        let client_id = config
            .oauth
            .client_id
            .clone()
            .ok_or_else(|| rooms_config::ConfigError::oauth("oauth.client_id is required"))?;
        let client_secret = config
            .oauth
            .client_secret
            .clone()
            .ok_or_else(|| rooms_config::ConfigError::oauth("oauth.client_secret is required"))?;

        info!(
            "Discovering OIDC provider metadata from {}",
            config.oauth.discovery_url
        );

        let client = OidcClient::discover(OidcConfig {
            client_id,
            client_secret,
            discovery_url: config.oauth.discovery_url.clone(),
            redirect_url: config.oauth.redirect_url.clone(),
            scopes: config.oauth.scopes.clone(),
        })
        .await?;

        info!("OIDC provider discovered");
        Some(Arc::new(client))
    } else {
        warn!("OAuth is disabled; SSO login routes will answer 404");
        None
    };

    let login_limiter = Arc::new(LoginRateLimiter::new(RateLimitConfig {
        max_attempts: config.rate_limit.max_attempts,
        window_secs: config.rate_limit.window_secs,
    }));

    let state = AppState {
        pool,
        sessions,
        oidc,
        login_limiter,
        cookies: CookieSettings {
            name: config.session.cookie_name.clone(),
            max_age_secs: config.session.max_age_secs,
            secure: config.session.secure,
        },
    };

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
