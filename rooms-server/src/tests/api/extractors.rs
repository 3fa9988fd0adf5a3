use crate::api::extractors::current_identity::token_from_cookie_header;

#[test]
fn given_single_cookie_when_parsed_then_value_returned() {
    let header = "rooms_session=abc123";

    assert_eq!(token_from_cookie_header(header, "rooms_session"), Some("abc123"));
}

#[test]
fn given_multiple_cookies_when_parsed_then_named_one_returned() {
    let header = "other=x; rooms_session=abc123; theme=dark";

    assert_eq!(token_from_cookie_header(header, "rooms_session"), Some("abc123"));
}

#[test]
fn given_missing_cookie_when_parsed_then_none() {
    let header = "other=x; theme=dark";

    assert_eq!(token_from_cookie_header(header, "rooms_session"), None);
}

#[test]
fn given_name_prefix_collision_when_parsed_then_exact_name_wins() {
    let header = "rooms_session_old=stale; rooms_session=fresh";

    assert_eq!(token_from_cookie_header(header, "rooms_session"), Some("fresh"));
}
