//! In-memory repository for chat messages.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::chat::{
    domain::{ChatChannel, ChatMessage, ChatMessageId},
    ports::{ChatRepository, ChatRepositoryError, ChatRepositoryResult},
};

/// Thread-safe in-memory chat log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatRepository {
    state: Arc<RwLock<InMemoryChatState>>,
}

#[derive(Debug, Default)]
struct InMemoryChatState {
    channels: HashMap<ChatChannel, Vec<ChatMessage>>,
    ids: HashSet<ChatMessageId>,
}

impl InMemoryChatRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ChatRepositoryError {
    ChatRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn append(&self, message: &ChatMessage) -> ChatRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.ids.insert(message.id()) {
            return Err(ChatRepositoryError::DuplicateMessage(message.id()));
        }
        state
            .channels
            .entry(message.channel().clone())
            .or_default()
            .push(message.clone());
        Ok(())
    }

    async fn list_channel(&self, channel: &ChatChannel) -> ChatRepositoryResult<Vec<ChatMessage>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.channels.get(channel).cloned().unwrap_or_default())
    }
}
