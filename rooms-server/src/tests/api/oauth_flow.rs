use crate::tests::{TEST_SESSION_COOKIE, cookie_header, extract_cookie, test_server};

use rooms_auth::{OidcClient, OidcConfig};
use rooms_db::SsoUserRepository;

use std::sync::Arc;

use axum_test::TestServer;
use http::StatusCode;
use http::header::LOCATION;
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATE_COOKIE: &str = "rooms_oauth_state";

async fn mount_discovery(provider: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/.well-known/openid-configuration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorization_endpoint": format!("{}/authorize", provider.uri()),
            "token_endpoint": format!("{}/token", provider.uri()),
            "userinfo_endpoint": format!("{}/userinfo", provider.uri()),
        })))
        .mount(provider)
        .await;
}

async fn mount_token(provider: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at-123",
            "token_type": "Bearer",
        })))
        .mount(provider)
        .await;
}

async fn mount_userinfo(provider: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(provider)
        .await;
}

async fn oidc_client(provider: &MockServer) -> Arc<OidcClient> {
    mount_discovery(provider).await;

    let client = OidcClient::discover(OidcConfig {
        client_id: "client-123".to_string(),
        client_secret: "secret-456".to_string(),
        discovery_url: format!("{}/.well-known/openid-configuration", provider.uri()),
        redirect_url: "http://localhost:5000/auth/google/callback".to_string(),
        scopes: "openid email profile".to_string(),
    })
    .await
    .expect("Failed to discover mock provider");

    Arc::new(client)
}

fn location_of(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect location")
        .to_str()
        .unwrap()
        .to_string()
}

/// Drive a full SSO login against the mock provider, returning the session
/// cookie value.
async fn run_sso_login(server: &TestServer) -> String {
    let response = server.get("/auth/google").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let attempt_state = extract_cookie(&response, STATE_COOKIE).expect("state cookie set");

    let response = server
        .get("/auth/google/callback")
        .add_query_param("code", "code-789")
        .add_query_param("state", &attempt_state)
        .add_header("Cookie", cookie_header(STATE_COOKIE, &attempt_state))
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/dashboard");

    extract_cookie(&response, TEST_SESSION_COOKIE).expect("session cookie set")
}

#[tokio::test]
async fn given_sso_login_then_redirected_to_provider_with_state_cookie() {
    let provider = MockServer::start().await;
    let client = oidc_client(&provider).await;
    let (server, _state) = test_server(Some(client)).await;

    let response = server.get("/auth/google").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let location = location_of(&response);
    assert!(location.starts_with(&format!("{}/authorize?", provider.uri())));
    assert!(location.contains("client_id=client-123"));

    let attempt_state = extract_cookie(&response, STATE_COOKIE).expect("state cookie set");
    assert_eq!(attempt_state.len(), 32);
    assert!(location.contains(&format!("state={}", attempt_state)));
}

#[tokio::test]
async fn given_successful_callback_then_session_bound_to_sso_identity() {
    let provider = MockServer::start().await;
    let client = oidc_client(&provider).await;
    mount_token(&provider).await;
    mount_userinfo(
        &provider,
        json!({"sub": "g123", "email": "b@x.com", "name": "Bob"}),
    )
    .await;
    let (server, _state) = test_server(Some(client)).await;

    let token = run_sso_login(&server).await;

    let response = server
        .get("/api/auth/session")
        .add_header("Cookie", cookie_header(TEST_SESSION_COOKIE, &token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["identity"]["kind"], "sso");
    assert_eq!(body["identity"]["name"], "Bob");
}

#[tokio::test]
async fn given_repeat_sso_login_same_subject_then_single_record_updated() {
    let provider = MockServer::start().await;
    let client = oidc_client(&provider).await;
    mount_token(&provider).await;
    mount_userinfo(
        &provider,
        json!({"sub": "g123", "email": "b@x.com", "name": "Bob"}),
    )
    .await;
    let (server, state) = test_server(Some(client)).await;

    run_sso_login(&server).await;
    run_sso_login(&server).await;

    let repo = SsoUserRepository::new(state.pool.clone());
    let user = repo
        .find_by_subject("g123")
        .await
        .unwrap()
        .expect("sso record exists");
    assert_eq!(user.email, "b@x.com");

    let row = sqlx::query("SELECT COUNT(*) FROM sso_users")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    let count: i64 = sqlx::Row::get(&row, 0);
    assert_eq!(count, 1);
}

#[tokio::test]
async fn given_state_mismatch_then_rejected_without_session() {
    let provider = MockServer::start().await;
    let client = oidc_client(&provider).await;
    let (server, _state) = test_server(Some(client)).await;

    let response = server.get("/auth/google").await;
    let attempt_state = extract_cookie(&response, STATE_COOKIE).unwrap();

    let response = server
        .get("/auth/google/callback")
        .add_query_param("code", "code-789")
        .add_query_param("state", "forged-state-token")
        .add_header("Cookie", cookie_header(STATE_COOKIE, &attempt_state))
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/login?error=invalid_state");
    assert!(extract_cookie(&response, TEST_SESSION_COOKIE).is_none());
}

#[tokio::test]
async fn given_callback_without_pending_attempt_then_rejected() {
    let provider = MockServer::start().await;
    let client = oidc_client(&provider).await;
    let (server, _state) = test_server(Some(client)).await;

    // No state cookie: there is no pending attempt to match against
    let response = server
        .get("/auth/google/callback")
        .add_query_param("code", "code-789")
        .add_query_param("state", "anything")
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/login?error=invalid_state");
    assert!(extract_cookie(&response, TEST_SESSION_COOKIE).is_none());
}

#[tokio::test]
async fn given_provider_denied_then_redirected_with_denied_error() {
    let provider = MockServer::start().await;
    let client = oidc_client(&provider).await;
    let (server, _state) = test_server(Some(client)).await;

    let response = server.get("/auth/google").await;
    let attempt_state = extract_cookie(&response, STATE_COOKIE).unwrap();

    let response = server
        .get("/auth/google/callback")
        .add_query_param("error", "access_denied")
        .add_query_param("state", &attempt_state)
        .add_header("Cookie", cookie_header(STATE_COOKIE, &attempt_state))
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/login?error=provider_denied");
    assert!(extract_cookie(&response, TEST_SESSION_COOKIE).is_none());
}

#[tokio::test]
async fn given_userinfo_missing_subject_then_no_session_issued() {
    let provider = MockServer::start().await;
    let client = oidc_client(&provider).await;
    mount_token(&provider).await;
    mount_userinfo(&provider, json!({"email": "b@x.com", "name": "Bob"})).await;
    let (server, state) = test_server(Some(client)).await;

    let response = server.get("/auth/google").await;
    let attempt_state = extract_cookie(&response, STATE_COOKIE).unwrap();

    let response = server
        .get("/auth/google/callback")
        .add_query_param("code", "code-789")
        .add_query_param("state", &attempt_state)
        .add_header("Cookie", cookie_header(STATE_COOKIE, &attempt_state))
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&response), "/login?error=provider_error");
    assert!(extract_cookie(&response, TEST_SESSION_COOKIE).is_none());

    let row = sqlx::query("SELECT COUNT(*) FROM sso_users")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    let count: i64 = sqlx::Row::get(&row, 0);
    assert_eq!(count, 0);
}

#[tokio::test]
async fn given_sso_disabled_then_login_route_answers_not_found() {
    let (server, _state) = test_server(None).await;

    let response = server.get("/auth/google").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
