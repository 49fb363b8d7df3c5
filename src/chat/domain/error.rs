//! Error types for chat validation.

use crate::directory::domain::UserId;
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned while building chat channels and messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatDomainError {
    /// A direct conversation needs two distinct users.
    #[error("user {0} cannot open a direct conversation with themself")]
    SelfConversation(UserId),

    /// The message text is empty after trimming.
    #[error("message text must not be empty")]
    EmptyMessage,

    /// The message text exceeds the configured limit.
    #[error("message has {actual} characters, exceeds limit of {max}")]
    MessageTooLong {
        /// Configured maximum.
        max: usize,
        /// Actual length.
        actual: usize,
    },
}

impl ChatDomainError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SelfConversation(_) | Self::EmptyMessage | Self::MessageTooLong { .. } => {
                ErrorKind::Validation
            }
        }
    }
}
