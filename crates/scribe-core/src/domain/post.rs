use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - represents a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub published: bool,
}

impl Post {
    /// Create a new post with a generated ID.
    ///
    /// The creation timestamp is taken at call time, so every post gets its
    /// own `created_at` rather than a value shared between constructions.
    pub fn new(
        title: String,
        author: String,
        content: String,
        published_at: Option<DateTime<Utc>>,
        published: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            content,
            created_at: Utc::now(),
            published_at,
            published,
        }
    }

    /// Overwrite the editable fields in place.
    ///
    /// `id`, `created_at`, `published`, and `published_at` are never touched
    /// by an update.
    pub fn apply(&mut self, changes: PostChanges) {
        self.title = changes.title;
        self.author = changes.author;
        self.content = changes.content;
    }
}

/// The set of fields an update is allowed to touch.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub author: String,
    pub content: String,
}
