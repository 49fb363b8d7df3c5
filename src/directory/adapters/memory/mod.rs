//! In-memory directory adapters for tests and embedded hosts.

mod directory;
mod identity;

pub use directory::InMemoryDirectoryRepository;
pub use identity::InMemoryIdentityAdmin;
