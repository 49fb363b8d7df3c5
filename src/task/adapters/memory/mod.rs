//! In-memory task adapters for tests and embedded hosts.

mod project;
mod storage;
mod task;

pub use project::InMemoryProjectRepository;
pub use storage::InMemoryFileStorage;
pub use task::InMemoryTaskRepository;
