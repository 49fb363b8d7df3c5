//! Domain model for chat channels and messages.

mod channel;
mod error;
mod message;

pub use channel::{ChatChannel, DirectChannel};
pub use error::ChatDomainError;
pub use message::{ChatMessage, ChatMessageId, PersistedChatMessageData};
