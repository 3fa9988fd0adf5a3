use rooms_core::{IdentityKind, LocalUser, Room};

use uuid::Uuid;

/// Local user with a unique email derived from the given tag
pub fn create_test_local_user(tag: &str) -> LocalUser {
    LocalUser::new(
        format!("user-{}", tag),
        format!("{}@example.com", tag),
        "0".repeat(64),
    )
}

pub fn create_test_room(creator_id: Uuid, creator_kind: IdentityKind) -> Room {
    Room::new(
        "Weekend Hikers".to_string(),
        "123456".to_string(),
        "https://chat.example.com/invite/hikers".to_string(),
        creator_id,
        creator_kind,
    )
}
