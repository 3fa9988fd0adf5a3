pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{current_session, google_callback, google_login, login, logout, signup},
        callback_params::CallbackParams,
        identity_dto::IdentityDto,
        login_request::LoginRequest,
        login_response::LoginResponse,
        session_response::SessionResponse,
        signup_request::SignupRequest,
        signup_response::SignupResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_identity::CurrentIdentity,
    message_response::MessageResponse,
    rooms::{
        create_room_request::CreateRoomRequest,
        join_room_request::JoinRoomRequest,
        join_room_response::JoinRoomResponse,
        room_dto::RoomDto,
        room_list_response::RoomListResponse,
        room_response::RoomResponse,
        rooms::{create_room, join_room, list_rooms, search_rooms},
    },
};

pub use crate::routes::build_router;
pub use crate::state::{AppState, CookieSettings};
