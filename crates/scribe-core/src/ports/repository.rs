use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostChanges};
use crate::error::RepoError;

/// Post repository - abstraction over the post collection backend.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, in insertion order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Append a post to the collection and return it.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Overwrite the editable fields of the post with the given ID.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<(), RepoError>;

    /// Remove the post with the given ID, preserving the order of the rest.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
