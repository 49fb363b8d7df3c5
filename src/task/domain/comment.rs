//! Task comments.

use super::CommentId;
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable comment on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    author_id: UserId,
    author_name: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment record. Text validation happens in
    /// [`TaskLifecycle::add_comment`](super::TaskLifecycle::add_comment).
    #[must_use]
    pub const fn new(
        id: CommentId,
        author_id: UserId,
        author_name: String,
        text: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            author_name,
            text,
            created_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the author's identifier.
    #[must_use]
    pub const fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Returns the author's display name at the time of writing.
    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Returns the comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
