//! Port contracts for projects and tasks.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod project;
pub mod repository;
pub mod storage;

pub use project::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use storage::{FileStorage, FileStorageError, FileStorageResult, FileUpload};

#[cfg(test)]
pub use repository::MockTaskRepository;
