pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{connect, create_memory_pool};
pub use error::{DbError, Result};
pub use repositories::room_repository::RoomRepository;
pub use repositories::sso_user_repository::SsoUserRepository;
pub use repositories::user_repository::UserRepository;
