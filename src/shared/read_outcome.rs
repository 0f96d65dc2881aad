// src/shared/read_outcome.rs
use actix_web::HttpResponse;
use serde::Serialize;

use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// ReadOutcome (one contract for every read)
// ──────────────────────────────────────────────────────────
// - Loaded(v): the read produced data
// - Empty: the read succeeded but there was nothing (no rows / no record)
// - Failed(e): the read did not complete; already logged at the call site
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("store unavailable: {0}")]
    Store(String),

    #[error("record could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome<T> {
    Loaded(T),
    Empty,
    Failed(ReadError),
}

impl<T> ReadOutcome<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => ReadOutcome::Loaded(v),
            None => ReadOutcome::Empty,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ReadOutcome::Loaded(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ReadOutcome::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ReadOutcome::Failed(_))
    }

    pub fn map<U, F>(self, f: F) -> ReadOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ReadOutcome::Loaded(v) => ReadOutcome::Loaded(f(v)),
            ReadOutcome::Empty => ReadOutcome::Empty,
            ReadOutcome::Failed(e) => ReadOutcome::Failed(e),
        }
    }

    /// `Empty` becomes `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, ReadError> {
        match self {
            ReadOutcome::Loaded(v) => Ok(Some(v)),
            ReadOutcome::Empty => Ok(None),
            ReadOutcome::Failed(e) => Err(e),
        }
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            ReadOutcome::Loaded(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> ReadOutcome<Vec<T>> {
    /// An empty collection is reported as `Empty`, never as `Loaded(vec![])`.
    pub fn from_collection(items: Vec<T>) -> Self {
        if items.is_empty() {
            ReadOutcome::Empty
        } else {
            ReadOutcome::Loaded(items)
        }
    }

    pub fn into_items(self) -> Result<Vec<T>, ReadError> {
        self.into_result().map(Option::unwrap_or_default)
    }

    pub fn items_or_default(self) -> Vec<T> {
        self.loaded().unwrap_or_default()
    }
}

impl<T> From<Result<Vec<T>, ReadError>> for ReadOutcome<Vec<T>> {
    fn from(result: Result<Vec<T>, ReadError>) -> Self {
        match result {
            Ok(items) => ReadOutcome::from_collection(items),
            Err(e) => ReadOutcome::Failed(e),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// HTTP rendering
// ──────────────────────────────────────────────────────────
//

/// Collections: `Empty` is a successful empty list.
pub fn collection_response<T: Serialize>(outcome: ReadOutcome<Vec<T>>) -> HttpResponse {
    match outcome {
        ReadOutcome::Loaded(items) => ApiResponse::success(items),
        ReadOutcome::Empty => ApiResponse::success(Vec::<T>::new()),
        ReadOutcome::Failed(_) => ApiResponse::internal_error(),
    }
}

/// Single records: `Empty` is a 404 with the given code.
pub fn record_response<T: Serialize>(
    outcome: ReadOutcome<T>,
    not_found_code: &str,
    not_found_message: &str,
) -> HttpResponse {
    match outcome {
        ReadOutcome::Loaded(record) => ApiResponse::success(record),
        ReadOutcome::Empty => ApiResponse::not_found(not_found_code, not_found_message),
        ReadOutcome::Failed(_) => ApiResponse::internal_error(),
    }
}
