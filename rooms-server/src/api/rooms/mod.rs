pub mod create_room_request;
pub mod join_room_request;
pub mod join_room_response;
pub mod room_dto;
pub mod room_list_response;
pub mod room_response;
pub mod rooms;
