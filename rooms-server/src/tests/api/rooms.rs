use crate::tests::{TEST_SESSION_COOKIE, cookie_header, extract_cookie, test_server};

use axum_test::TestServer;
use http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

/// Signup + login, returning the session cookie header value
async fn login_session(server: &TestServer) -> String {
    server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email": "alice@x.com",
            "password": "secret1",
            "confirm_password": "secret1",
        }))
        .await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({"identifier": "alice", "password": "secret1"}))
        .await;

    let token = extract_cookie(&response, TEST_SESSION_COOKIE).expect("session cookie set");
    cookie_header(TEST_SESSION_COOKIE, &token)
}

async fn create_room(server: &TestServer, session: &str, name: &str) -> Value {
    let response = server
        .post("/api/rooms")
        .add_header("Cookie", session.to_string())
        .json(&json!({
            "name": name,
            "password": "123456",
            "link": "https://chat.example.com/invite/abc",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn given_no_session_then_room_operations_are_rejected() {
    let (server, _state) = test_server(None).await;

    let list = server.get("/api/rooms").await;
    assert_eq!(list.status_code(), StatusCode::UNAUTHORIZED);

    let create = server
        .post("/api/rooms")
        .json(&json!({"name": "X", "password": "123456", "link": "https://x"}))
        .await;
    assert_eq!(create.status_code(), StatusCode::UNAUTHORIZED);

    let body: Value = create.json();
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn given_session_when_creating_room_then_creator_identity_stamped() {
    let (server, _state) = test_server(None).await;
    let session = login_session(&server).await;

    let body = create_room(&server, &session, "Weekend Hikers").await;

    assert_eq!(body["room"]["name"], "Weekend Hikers");
    assert_eq!(body["room"]["creator_kind"], "local");
    // Neither the password nor the link is exposed in listings
    assert!(body["room"].get("password").is_none());
    assert!(body["room"].get("link").is_none());
}

#[tokio::test]
async fn given_rooms_exist_then_listing_and_search_return_them() {
    let (server, _state) = test_server(None).await;
    let session = login_session(&server).await;

    create_room(&server, &session, "Weekend Hikers").await;
    create_room(&server, &session, "Chess Club").await;

    let response = server
        .get("/api/rooms")
        .add_header("Cookie", session.to_string())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["rooms"].as_array().unwrap().len(), 2);

    let response = server
        .get("/api/rooms/search")
        .add_query_param("q", "Hik")
        .add_header("Cookie", session.to_string())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let rooms = body["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["name"], "Weekend Hikers");
}

#[tokio::test]
async fn given_correct_room_password_when_joining_then_link_revealed() {
    let (server, _state) = test_server(None).await;
    let session = login_session(&server).await;
    let body = create_room(&server, &session, "Weekend Hikers").await;
    let room_id = body["room"]["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/rooms/{}/join", room_id))
        .add_header("Cookie", session.to_string())
        .json(&json!({"password": "123456"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["link"], "https://chat.example.com/invite/abc");
}

#[tokio::test]
async fn given_wrong_room_password_when_joining_then_rejected() {
    let (server, _state) = test_server(None).await;
    let session = login_session(&server).await;
    let body = create_room(&server, &session, "Weekend Hikers").await;
    let room_id = body["room"]["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/rooms/{}/join", room_id))
        .add_header("Cookie", session.to_string())
        .json(&json!({"password": "654321"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["field"], "password");
}

#[tokio::test]
async fn given_unknown_room_id_when_joining_then_not_found() {
    let (server, _state) = test_server(None).await;
    let session = login_session(&server).await;

    let response = server
        .post(&format!("/api/rooms/{}/join", Uuid::new_v4()))
        .add_header("Cookie", session.to_string())
        .json(&json!({"password": "123456"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_malformed_room_password_when_creating_then_validation_error() {
    let (server, _state) = test_server(None).await;
    let session = login_session(&server).await;

    let response = server
        .post("/api/rooms")
        .add_header("Cookie", session.to_string())
        .json(&json!({
            "name": "Weekend Hikers",
            "password": "12ab56",
            "link": "https://chat.example.com/invite/abc",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "password");
}
