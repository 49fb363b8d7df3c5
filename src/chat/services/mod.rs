//! Application services for chat.

mod chat;

pub use chat::{ChatService, ChatServiceError, ChatServiceResult};
