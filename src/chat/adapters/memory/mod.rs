//! In-memory chat adapters.

mod chat;

pub use chat::InMemoryChatRepository;
