pub mod fixtures;
pub mod test_db;

pub use fixtures::{create_test_local_user, create_test_room};
pub use test_db::create_test_pool;
