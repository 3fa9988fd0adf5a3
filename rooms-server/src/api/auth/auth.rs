//! Authentication handlers: local signup/login/logout, the SSO redirect
//! flow, and the current-session endpoint.
//!
//! Every failure path leaves the caller without a session; no handler
//! partially authenticates.

use crate::api::auth::callback_params::CallbackParams;
use crate::api::auth::cookie;
use crate::api::extractors::current_identity::token_from_cookie_header;
use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CurrentIdentity, LoginRequest, LoginResponse, MessageResponse,
    SessionResponse, SignupRequest, SignupResponse,
};

use rooms_auth::{AuthError, OidcClient, password};
use rooms_core::{Identity, LocalUser};
use rooms_db::{SsoUserRepository, UserRepository};

use axum::{
    Json,
    extract::{Query, State},
    http::{
        HeaderMap, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use log::{info, warn};

// =============================================================================
// Local accounts
// =============================================================================

/// POST /api/auth/signup
///
/// Create a new local account. No session is issued; the caller logs in next.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    state.login_limiter.check()?;

    let username = request.username.trim().to_string();
    let email = request.email.trim().to_string();
    let password_input = request.password.trim();
    let confirm = request.confirm_password.trim();

    if username.is_empty() {
        return Err(ApiError::validation("username is required", Some("username")));
    }
    if email.is_empty() {
        return Err(ApiError::validation("email is required", Some("email")));
    }
    if password_input.is_empty() {
        return Err(ApiError::validation("password is required", Some("password")));
    }
    if password_input != confirm {
        return Err(ApiError::validation(
            "Passwords do not match",
            Some("confirm_password"),
        ));
    }

    let user = LocalUser::new(username, email, password::hash(password_input));
    UserRepository::new(state.pool.clone()).create(&user).await?;

    info!("New local account {} created", user.id);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            message: "Account created successfully, please log in".to_string(),
        }),
    ))
}

/// POST /api/auth/login
///
/// Verify local credentials and issue a session cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Response> {
    state.login_limiter.check()?;

    let identifier = request.identifier.trim();
    let password_input = request.password.trim();

    if identifier.is_empty() || password_input.is_empty() {
        return Err(ApiError::validation(
            "Username/email and password are required",
            None,
        ));
    }

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.find_by_identifier(identifier).await?;

    // Unknown identifier and wrong password get the same answer so callers
    // cannot probe which accounts exist.
    let Some(user) = user else {
        warn!("Login failed: unknown identifier");
        return Err(ApiError::invalid_credentials());
    };

    if !password::verify(password_input, &user.password_digest) {
        warn!("Login failed for account {}", user.id);
        return Err(ApiError::invalid_credentials());
    }

    let token = state.sessions.issue_local(&user)?;
    let identity = Identity::from(&user);

    info!("Account {} logged in", user.id);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie::session_cookie(&state.cookies, &token))]),
        Json(LoginResponse {
            message: format!("Welcome back, {}", identity.label),
            identity: identity.into(),
        }),
    )
        .into_response())
}

/// GET /api/auth/session
///
/// The identity bound to the caller's active session.
pub async fn current_session(CurrentIdentity(identity): CurrentIdentity) -> Json<SessionResponse> {
    Json(SessionResponse {
        identity: identity.into(),
    })
}

/// POST /api/auth/logout
///
/// Clear the session cookie. Ending a session that does not exist is a no-op.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, cookie::clear_session_cookie(&state.cookies))]),
        Json(MessageResponse::new("Logged out successfully")),
    )
}

// =============================================================================
// SSO (OIDC redirect flow)
// =============================================================================

/// GET /auth/google
///
/// Start an SSO attempt: set the single-use state cookie and redirect the
/// caller to the provider's consent screen.
pub async fn google_login(State(state): State<AppState>) -> ApiResult<Response> {
    let oidc = state
        .oidc
        .as_ref()
        .ok_or_else(|| ApiError::not_found("Single sign-on is not enabled"))?;

    let attempt_state = OidcClient::generate_state();
    let url = oidc.authorization_url(&attempt_state)?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie::state_cookie(&state.cookies, &attempt_state))]),
        Redirect::to(&url),
    )
        .into_response())
}

/// GET /auth/google/callback
///
/// Finish an SSO attempt. On success the caller lands on the dashboard with
/// a session cookie; on any failure they land back on the login page with an
/// error code and no session. The state cookie is cleared either way.
pub async fn google_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
    headers: HeaderMap,
) -> Response {
    match run_callback(&state, &params, &headers).await {
        Ok(token) => (
            AppendHeaders([
                (SET_COOKIE, cookie::session_cookie(&state.cookies, &token)),
                (SET_COOKIE, cookie::clear_state_cookie(&state.cookies)),
            ]),
            Redirect::to("/dashboard"),
        )
            .into_response(),
        Err(e) => {
            warn!("SSO login failed: {}", e);
            (
                AppendHeaders([(SET_COOKIE, cookie::clear_state_cookie(&state.cookies))]),
                Redirect::to(&format!("/login?error={}", e.code().to_ascii_lowercase())),
            )
                .into_response()
        }
    }
}

async fn run_callback(
    state: &AppState,
    params: &CallbackParams,
    headers: &HeaderMap,
) -> ApiResult<String> {
    let oidc = state
        .oidc
        .as_ref()
        .ok_or_else(|| ApiError::not_found("Single sign-on is not enabled"))?;

    // The state token must round-trip unchanged; a missing cookie, a missing
    // parameter, or a mismatch all fail closed.
    let expected = headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| token_from_cookie_header(header, cookie::STATE_COOKIE_NAME))
        .ok_or_else(AuthError::invalid_state)?;

    let presented = params.state.as_deref().unwrap_or("");
    if !OidcClient::state_matches(expected, presented) {
        return Err(AuthError::invalid_state().into());
    }

    if let Some(error) = &params.error {
        return Err(OidcClient::callback_error(error).into());
    }

    let code = params
        .code
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AuthError::provider_exchange("callback is missing the authorization code"))?;

    // Server-to-server: exchange the code, then fetch the identity claims
    let claims = oidc.authenticate(code).await?;

    let (user, is_new) = SsoUserRepository::new(state.pool.clone())
        .upsert(
            &claims.subject,
            &claims.email,
            &claims.name,
            claims.picture.as_deref(),
        )
        .await?;

    if is_new {
        info!("New SSO account {} created", user.id);
    } else {
        info!("SSO account {} logged in again", user.id);
    }

    state.sessions.issue_sso(&user).map_err(ApiError::from)
}
