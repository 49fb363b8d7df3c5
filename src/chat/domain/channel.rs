//! Chat channel addressing.

use super::ChatDomainError;
use crate::directory::domain::{TeamId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A conversation between exactly two users.
///
/// The pair is stored in sorted order, so `DirectChannel::new(a, b)` and
/// `DirectChannel::new(b, a)` address the same conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectChannel {
    low: UserId,
    high: UserId,
}

impl DirectChannel {
    /// Creates the channel between two users.
    ///
    /// # Errors
    ///
    /// Returns [`ChatDomainError::SelfConversation`] when both identifiers
    /// are equal.
    pub fn new(first: UserId, second: UserId) -> Result<Self, ChatDomainError> {
        match first.cmp(&second) {
            std::cmp::Ordering::Less => Ok(Self {
                low: first,
                high: second,
            }),
            std::cmp::Ordering::Greater => Ok(Self {
                low: second,
                high: first,
            }),
            std::cmp::Ordering::Equal => Err(ChatDomainError::SelfConversation(first)),
        }
    }

    /// Returns both participants in canonical order.
    #[must_use]
    pub const fn participants(&self) -> (&UserId, &UserId) {
        (&self.low, &self.high)
    }

    /// Returns `true` when the user is one side of the conversation.
    #[must_use]
    pub fn involves(&self, user_id: &UserId) -> bool {
        self.low == *user_id || self.high == *user_id
    }

    /// Returns the participant that is not `user_id`.
    #[must_use]
    pub fn other(&self, user_id: &UserId) -> Option<&UserId> {
        if self.low == *user_id {
            Some(&self.high)
        } else if self.high == *user_id {
            Some(&self.low)
        } else {
            None
        }
    }
}

impl fmt::Display for DirectChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "direct:{}:{}", self.low, self.high)
    }
}

/// Where a message is posted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum ChatChannel {
    /// A two-person conversation.
    Direct(DirectChannel),
    /// A team conversation.
    Team(TeamId),
}

impl fmt::Display for ChatChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(channel) => channel.fmt(f),
            Self::Team(team_id) => write!(f, "team:{team_id}"),
        }
    }
}
