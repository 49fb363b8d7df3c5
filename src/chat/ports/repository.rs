//! Repository port for chat messages.

use crate::chat::domain::{ChatChannel, ChatMessage, ChatMessageId};
use crate::error::ErrorKind;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for chat repository operations.
pub type ChatRepositoryResult<T> = Result<T, ChatRepositoryError>;

/// Append-only message log keyed by channel.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Appends a message to its channel.
    ///
    /// # Errors
    ///
    /// Returns [`ChatRepositoryError::DuplicateMessage`] when the ID is
    /// already stored.
    async fn append(&self, message: &ChatMessage) -> ChatRepositoryResult<()>;

    /// Returns a channel's messages in append order.
    async fn list_channel(&self, channel: &ChatChannel) -> ChatRepositoryResult<Vec<ChatMessage>>;
}

/// Errors returned by chat repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ChatRepositoryError {
    /// A message with the same identifier already exists.
    #[error("duplicate message identifier: {0}")]
    DuplicateMessage(ChatMessageId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ChatRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateMessage(_) => ErrorKind::Validation,
            Self::Persistence(_) => ErrorKind::Persistence,
        }
    }
}
