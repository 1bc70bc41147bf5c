//! Error handling - maps domain failures to HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use scribe_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
///
/// The API has a single failure mode: addressing a post id that is not in
/// the collection.
#[derive(Debug)]
pub enum AppError {
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Item not found"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound => ErrorResponse::not_found(),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from repository errors
impl From<scribe_core::error::RepoError> for AppError {
    fn from(err: scribe_core::error::RepoError) -> Self {
        match err {
            scribe_core::error::RepoError::NotFound => AppError::NotFound,
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
