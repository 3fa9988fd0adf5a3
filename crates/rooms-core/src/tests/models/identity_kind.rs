use crate::IdentityKind;

use std::str::FromStr;

#[test]
fn test_identity_kind_as_str() {
    assert_eq!(IdentityKind::Local.as_str(), "local");
    assert_eq!(IdentityKind::Sso.as_str(), "sso");
}

#[test]
fn test_identity_kind_from_str() {
    assert_eq!(
        IdentityKind::from_str("local").unwrap(),
        IdentityKind::Local
    );
    assert_eq!(IdentityKind::from_str("sso").unwrap(), IdentityKind::Sso);
    assert!(IdentityKind::from_str("invalid").is_err());
}

#[test]
fn test_identity_kind_serde_round_trip() {
    let json = serde_json::to_string(&IdentityKind::Sso).unwrap();
    assert_eq!(json, "\"sso\"");
    let parsed: IdentityKind = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, IdentityKind::Sso);
}
