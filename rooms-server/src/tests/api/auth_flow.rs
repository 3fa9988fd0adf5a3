use crate::tests::{TEST_SESSION_COOKIE, cookie_header, extract_cookie, test_server};

use axum_test::TestServer;
use http::StatusCode;
use serde_json::{Value, json};

async fn signup(server: &TestServer, username: &str, email: &str, password: &str) -> StatusCode {
    server
        .post("/api/auth/signup")
        .json(&json!({
            "username": username,
            "email": email,
            "password": password,
            "confirm_password": password,
        }))
        .await
        .status_code()
}

#[tokio::test]
async fn given_signup_and_login_then_session_is_bound_to_that_account() {
    let (server, _state) = test_server(None).await;

    // Signup succeeds but issues no session
    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email": "alice@x.com",
            "password": "secret1",
            "confirm_password": "secret1",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert!(extract_cookie(&response, TEST_SESSION_COOKIE).is_none());

    // Login issues the session cookie
    let response = server
        .post("/api/auth/login")
        .json(&json!({"identifier": "alice", "password": "secret1"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["identity"]["kind"], "local");
    assert_eq!(body["identity"]["name"], "alice");

    let token = extract_cookie(&response, TEST_SESSION_COOKIE).expect("session cookie set");
    assert!(!token.is_empty());

    // The session endpoint resolves back to the same identity
    let response = server
        .get("/api/auth/session")
        .add_header("Cookie", cookie_header(TEST_SESSION_COOKIE, &token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let session: Value = response.json();
    assert_eq!(session["identity"]["id"], body["identity"]["id"]);
    assert_eq!(session["identity"]["kind"], "local");
}

#[tokio::test]
async fn given_login_by_email_identifier_then_session_issued() {
    let (server, _state) = test_server(None).await;
    signup(&server, "alice", "alice@x.com", "secret1").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({"identifier": "alice@x.com", "password": "secret1"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(extract_cookie(&response, TEST_SESSION_COOKIE).is_some());
}

#[tokio::test]
async fn given_unknown_identifier_and_wrong_password_then_same_error_code() {
    let (server, _state) = test_server(None).await;
    signup(&server, "alice", "alice@x.com", "secret1").await;

    // Unknown identifier
    let unknown = server
        .post("/api/auth/login")
        .json(&json!({"identifier": "nobody", "password": "secret1"}))
        .await;
    assert_eq!(unknown.status_code(), StatusCode::UNAUTHORIZED);
    let unknown_body: Value = unknown.json();

    // Wrong password for an existing account
    let wrong = server
        .post("/api/auth/login")
        .json(&json!({"identifier": "alice", "password": "wrong"}))
        .await;
    assert_eq!(wrong.status_code(), StatusCode::UNAUTHORIZED);
    let wrong_body: Value = wrong.json();

    // Indistinguishable to the caller
    assert_eq!(unknown_body["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(unknown_body["error"]["code"], wrong_body["error"]["code"]);
    assert_eq!(unknown_body["error"]["message"], wrong_body["error"]["message"]);
}

#[tokio::test]
async fn given_duplicate_email_signup_then_conflict_and_no_second_account() {
    let (server, state) = test_server(None).await;
    assert_eq!(signup(&server, "alice", "alice@x.com", "secret1").await, StatusCode::CREATED);

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice2",
            "email": "alice@x.com",
            "password": "secret2",
            "confirm_password": "secret2",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DUPLICATE_EMAIL");

    let row = sqlx::query("SELECT COUNT(*) FROM users")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    let count: i64 = sqlx::Row::get(&row, 0);
    assert_eq!(count, 1);
}

#[tokio::test]
async fn given_missing_fields_on_signup_then_validation_error() {
    let (server, _state) = test_server(None).await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "",
            "email": "alice@x.com",
            "password": "secret1",
            "confirm_password": "secret1",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "username");
}

#[tokio::test]
async fn given_mismatched_password_confirmation_then_validation_error() {
    let (server, _state) = test_server(None).await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email": "alice@x.com",
            "password": "secret1",
            "confirm_password": "secret2",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["field"], "confirm_password");
}

#[tokio::test]
async fn given_no_session_when_reading_session_then_unauthenticated() {
    let (server, _state) = test_server(None).await;

    let response = server.get("/api/auth/session").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn given_tampered_session_cookie_then_unauthenticated() {
    let (server, _state) = test_server(None).await;

    let response = server
        .get("/api/auth/session")
        .add_header("Cookie", cookie_header(TEST_SESSION_COOKIE, "not-a-real-token"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_logout_then_session_cookie_cleared_and_logout_is_idempotent() {
    let (server, _state) = test_server(None).await;
    signup(&server, "alice", "alice@x.com", "secret1").await;

    // Logout with a session clears the cookie
    let response = server.post("/api/auth/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let cleared = extract_cookie(&response, TEST_SESSION_COOKIE);
    assert_eq!(cleared.as_deref(), Some(""));

    // Logout without any session is still not an error
    let response = server.post("/api/auth/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
