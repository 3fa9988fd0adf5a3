pub mod error;
pub mod models;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::identity_kind::IdentityKind;
pub use models::local_user::LocalUser;
pub use models::room::Room;
pub use models::sso_user::SsoUser;

#[cfg(test)]
mod tests;
