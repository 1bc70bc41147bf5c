//! In-memory post repository.
//!
//! Posts live in an insertion-ordered Vec guarded by an async RwLock.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use scribe_core::domain::{Post, PostChanges};
use scribe_core::error::RepoError;
use scribe_core::ports::PostRepository;

/// In-memory post collection using a Vec with async RwLock.
///
/// The Vec keeps insertion order and lookups are linear scans. The lock
/// serializes concurrent writers; the original unguarded design allowed
/// lost updates under concurrent requests.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());

        tracing::debug!(id = %post.id, "Post stored. Collection size: {}", posts.len());

        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(changes);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        posts.remove(index);

        tracing::debug!(id = %id, "Post removed. Collection size: {}", posts.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(title: &str) -> Post {
        Post::new(
            title.to_string(),
            "Ada".to_string(),
            "Content".to_string(),
            None,
            false,
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post("First")).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.id, saved.id);
        assert_eq!(found.title, "First");
    }

    #[tokio::test]
    async fn test_find_unknown_id_is_none() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("First")).await.unwrap();

        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("a")).await.unwrap();
        repo.insert(post("b")).await.unwrap();
        repo.insert(post("c")).await.unwrap();

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_update_touches_only_editable_fields() {
        let repo = InMemoryPostRepository::new();
        let saved = repo
            .insert(Post::new(
                "Draft".to_string(),
                "Ada".to_string(),
                "Content".to_string(),
                Some(Utc::now()),
                true,
            ))
            .await
            .unwrap();

        repo.update(
            saved.id,
            PostChanges {
                title: "Final".to_string(),
                author: "Grace".to_string(),
                content: "Rewritten".to_string(),
            },
        )
        .await
        .unwrap();

        let updated = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.author, "Grace");
        assert_eq!(updated.content, "Rewritten");
        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.created_at, saved.created_at);
        assert_eq!(updated.published_at, saved.published_at);
        assert!(updated.published);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryPostRepository::new();

        let result = repo
            .update(
                Uuid::new_v4(),
                PostChanges {
                    title: "t".to_string(),
                    author: "a".to_string(),
                    content: "c".to_string(),
                },
            )
            .await;
        assert_eq!(result, Err(RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("a")).await.unwrap();
        let middle = repo.insert(post("b")).await.unwrap();
        repo.insert(post("c")).await.unwrap();

        repo.delete(middle.id).await.unwrap();

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["a", "c"]);
        assert!(repo.find_by_id(middle.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let repo = InMemoryPostRepository::new();

        assert_eq!(repo.delete(Uuid::new_v4()).await, Err(RepoError::NotFound));
    }
}
