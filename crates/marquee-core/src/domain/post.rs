use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog post authored by a registered user.
///
/// Only the author may update or delete a post; reads are open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(author_id: Uuid, title: String, body: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            body,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given user is allowed to mutate this post.
    pub fn is_author(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}
