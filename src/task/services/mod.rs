//! Application services for projects and the task lifecycle.

mod board;
mod lifecycle;
mod project;

pub use board::{Board, BoardColumn};
pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use project::{ProjectService, ProjectServiceError, ProjectServiceResult};
