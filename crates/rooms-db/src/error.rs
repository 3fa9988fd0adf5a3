use rooms_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    /// An insert collided with the unique email constraint
    #[error("An account with that email already exists {location}")]
    DuplicateEmail { location: ErrorLocation },
}

impl DbError {
    #[track_caller]
    pub(crate) fn duplicate_email() -> Self {
        Self::DuplicateEmail {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// True when `e` is a unique-constraint violation on the given column
/// (SQLite reports the column as "table.column" in the error message).
pub(crate) fn is_unique_violation_on(e: &sqlx::Error, column: &str) -> bool {
    match e {
        sqlx::Error::Database(db) => db.is_unique_violation() && db.message().contains(column),
        _ => false,
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
