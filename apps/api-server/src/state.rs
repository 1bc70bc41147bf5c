//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::PostRepository;
use scribe_infra::InMemoryPostRepository;

/// Shared application state.
///
/// The post store is owned here and handed to handlers explicitly; there is
/// no process-global collection.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the in-memory post store.
    /// Posts do not survive a restart.
    pub fn new() -> Self {
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());

        tracing::info!("Application state initialized (in-memory store)");

        Self { posts }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
