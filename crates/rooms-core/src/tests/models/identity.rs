use crate::{Identity, IdentityKind, LocalUser, SsoUser};

#[test]
fn test_identity_from_local_user_carries_username() {
    let user = LocalUser::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "digest".to_string(),
    );

    let identity = Identity::from(&user);

    assert_eq!(identity.id, user.id);
    assert_eq!(identity.kind, IdentityKind::Local);
    assert_eq!(identity.label, "alice");
}

#[test]
fn test_identity_from_sso_user_carries_profile_name() {
    let user = SsoUser::new(
        "g-123".to_string(),
        "bob@example.com".to_string(),
        "Bob".to_string(),
        None,
    );

    let identity = Identity::from(&user);

    assert_eq!(identity.id, user.id);
    assert_eq!(identity.kind, IdentityKind::Sso);
    assert_eq!(identity.label, "Bob");
}

#[test]
fn test_sso_user_first_login_timestamps_match() {
    let user = SsoUser::new(
        "g-123".to_string(),
        "bob@example.com".to_string(),
        "Bob".to_string(),
        Some("https://example.com/p.png".to_string()),
    );

    assert_eq!(user.created_at, user.last_login_at);
}
