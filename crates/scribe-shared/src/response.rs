//! API error response body.

use serde::{Deserialize, Serialize};

/// Error body carrying a single human-readable detail field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human-readable explanation of the failure.
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// The fixed body for a missing post.
    pub fn not_found() -> Self {
        Self::new("Item not found")
    }
}
