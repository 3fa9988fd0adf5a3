use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with the full schema applied
pub async fn create_test_pool() -> SqlitePool {
    rooms_db::create_memory_pool()
        .await
        .expect("Failed to create test pool")
}
