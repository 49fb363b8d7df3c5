//! Chat message entity.

use super::{ChatChannel, ChatDomainError};
use crate::directory::domain::{User, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatMessageId(Uuid);

impl ChatMessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a message identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ChatMessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChatMessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable message posted to a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: ChatMessageId,
    channel: ChatChannel,
    sender_id: UserId,
    sender_name: String,
    text: String,
    sent_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedChatMessageData {
    /// Persisted message identifier.
    pub id: ChatMessageId,
    /// Persisted channel.
    pub channel: ChatChannel,
    /// Persisted sender.
    pub sender_id: UserId,
    /// Sender display name at posting time.
    pub sender_name: String,
    /// Persisted text.
    pub text: String,
    /// Persisted posting timestamp.
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a message from a resolved sender.
    ///
    /// The text is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ChatDomainError::EmptyMessage`] for blank text and
    /// [`ChatDomainError::MessageTooLong`] above `max_chars` characters.
    pub fn new(
        channel: ChatChannel,
        sender: &User,
        text: &str,
        max_chars: usize,
        clock: &impl Clock,
    ) -> Result<Self, ChatDomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatDomainError::EmptyMessage);
        }
        let length = trimmed.chars().count();
        if length > max_chars {
            return Err(ChatDomainError::MessageTooLong {
                max: max_chars,
                actual: length,
            });
        }
        Ok(Self {
            id: ChatMessageId::new(),
            channel,
            sender_id: sender.id().clone(),
            sender_name: sender.display_name().to_owned(),
            text: trimmed.to_owned(),
            sent_at: clock.utc(),
        })
    }

    /// Reconstructs a message from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedChatMessageData) -> Self {
        Self {
            id: data.id,
            channel: data.channel,
            sender_id: data.sender_id,
            sender_name: data.sender_name,
            text: data.text,
            sent_at: data.sent_at,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> ChatMessageId {
        self.id
    }

    /// Returns the channel.
    #[must_use]
    pub const fn channel(&self) -> &ChatChannel {
        &self.channel
    }

    /// Returns the sender's identifier.
    #[must_use]
    pub const fn sender_id(&self) -> &UserId {
        &self.sender_id
    }

    /// Returns the sender's display name at posting time.
    #[must_use]
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Returns the text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the posting timestamp.
    #[must_use]
    pub const fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }
}
