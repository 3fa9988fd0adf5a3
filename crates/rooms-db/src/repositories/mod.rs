pub mod room_repository;
pub mod sso_user_repository;
pub mod user_repository;

// -------------------------------------------------------------------------- //

use crate::{DbError, Result};

use rooms_core::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("{} is not a valid UUID: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(secs: i64, column: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Initialization {
        message: format!("{} holds an out-of-range timestamp: {}", column, secs),
        location: ErrorLocation::from(Location::caller()),
    })
}
