//! Room REST API handlers.
//!
//! Every handler passes through the session gate; the authenticated
//! identity's id and kind are stamped onto rooms at creation and otherwise
//! only read back for display. Room passwords are plaintext 6-digit shared
//! secrets compared directly - they are not authentication credentials.

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreateRoomRequest, CurrentIdentity, JoinRoomRequest, JoinRoomResponse,
    RoomDto, RoomListResponse, RoomResponse,
};

use rooms_core::Room;
use rooms_db::RoomRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use log::info;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SearchRoomsQuery {
    #[serde(default)]
    pub q: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/rooms
///
/// List all rooms, newest first
pub async fn list_rooms(
    State(state): State<AppState>,
    CurrentIdentity(_identity): CurrentIdentity,
) -> ApiResult<Json<RoomListResponse>> {
    let repo = RoomRepository::new(state.pool.clone());
    let rooms = repo.find_all().await?;

    Ok(Json(RoomListResponse {
        rooms: rooms.into_iter().map(RoomDto::from).collect(),
    }))
}

/// GET /api/rooms/search?q=
///
/// Substring search on room names
pub async fn search_rooms(
    State(state): State<AppState>,
    CurrentIdentity(_identity): CurrentIdentity,
    Query(query): Query<SearchRoomsQuery>,
) -> ApiResult<Json<RoomListResponse>> {
    let repo = RoomRepository::new(state.pool.clone());
    let rooms = repo.search_by_name(query.q.trim()).await?;

    Ok(Json(RoomListResponse {
        rooms: rooms.into_iter().map(RoomDto::from).collect(),
    }))
}

/// POST /api/rooms
///
/// Create a room stamped with the caller's identity
pub async fn create_room(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(request): Json<CreateRoomRequest>,
) -> ApiResult<(StatusCode, Json<RoomResponse>)> {
    let name = request.name.trim().to_string();
    let password = request.password.trim().to_string();
    let link = request.link.trim().to_string();

    if name.is_empty() {
        return Err(ApiError::validation("name is required", Some("name")));
    }
    if password.len() != 6 || !password.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::validation(
            "password must be exactly 6 digits",
            Some("password"),
        ));
    }
    if link.is_empty() {
        return Err(ApiError::validation("link is required", Some("link")));
    }

    let room = Room::new(name, password, link, identity.id, identity.kind);
    RoomRepository::new(state.pool.clone()).create(&room).await?;

    info!("Room {} created by {} ({})", room.id, identity.id, identity.kind);

    Ok((
        StatusCode::CREATED,
        Json(RoomResponse { room: room.into() }),
    ))
}

/// POST /api/rooms/:id/join
///
/// Check the room password and reveal the external link
pub async fn join_room(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
    Json(request): Json<JoinRoomRequest>,
) -> ApiResult<Json<JoinRoomResponse>> {
    let room_id = Uuid::parse_str(&id)?;

    let repo = RoomRepository::new(state.pool.clone());
    let room = repo
        .find_by_id(room_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Room {} not found", id)))?;

    if room.password != request.password.trim() {
        return Err(ApiError::validation(
            "Incorrect room password",
            Some("password"),
        ));
    }

    info!("Identity {} joined room {}", identity.id, room.id);

    Ok(Json(JoinRoomResponse { link: room.link }))
}
