pub mod claims;
pub mod error;
pub mod login_rate_limiter;
pub mod oidc;
pub mod password;
pub mod session;

pub use claims::SessionClaims;
pub use error::{AuthError, Result};
pub use login_rate_limiter::{LoginRateLimiter, RateLimitConfig};
pub use oidc::{IdentityClaims, OidcClient, OidcConfig, ProviderMetadata};
pub use session::SessionManager;
