use sea_orm::{DbErr, DeleteResult};
use std::fmt::Display;
use std::str::FromStr;

use crate::modules::portfolio::application::ports::outgoing::ContentStoreError;

pub(crate) fn map_db_err(e: DbErr) -> ContentStoreError {
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ContentStoreError::NotFound,
        other => ContentStoreError::DatabaseError(other.to_string()),
    }
}

pub(crate) fn ensure_deleted(result: DeleteResult) -> Result<(), ContentStoreError> {
    if result.rows_affected == 0 {
        Err(ContentStoreError::NotFound)
    } else {
        Ok(())
    }
}

/// Text columns holding enum values go through `FromStr`; a bad value is a decode failure.
pub(crate) fn parse_stored<T>(value: &str) -> Result<T, ContentStoreError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|e: T::Err| ContentStoreError::SerializationError(e.to_string()))
}

/// Trimmed, with blank turned into NULL.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
