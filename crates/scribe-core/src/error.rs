//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors. The only failure a post operation can hit is
/// addressing an id that is not in the collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,
}
