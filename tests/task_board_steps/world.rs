//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use projectflow::directory::{adapters::memory::InMemoryDirectoryRepository, domain::UserId};
use projectflow::task::{
    adapters::memory::{InMemoryFileStorage, InMemoryProjectRepository, InMemoryTaskRepository},
    domain::{Project, Task},
    services::{TaskLifecycleError, TaskLifecycleService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryProjectRepository,
    InMemoryDirectoryRepository,
    InMemoryFileStorage,
    DefaultClock,
>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub service: TestTaskService,
    pub directory: Arc<InMemoryDirectoryRepository>,
    pub projects: Arc<InMemoryProjectRepository>,
    pub project: Option<Project>,
    pub task: Option<Task>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskBoardWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let directory = Arc::new(InMemoryDirectoryRepository::new());
        let projects = Arc::new(InMemoryProjectRepository::new());
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&projects),
            Arc::clone(&directory),
            Arc::new(InMemoryFileStorage::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            directory,
            projects,
            project: None,
            task: None,
            last_result: None,
        }
    }

    /// Returns the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Records an operation result, keeping successful values as the
    /// current task.
    pub fn record(&mut self, result: Result<Task, TaskLifecycleError>) {
        if let Ok(ref updated) = result {
            self.task = Some(updated.clone());
        }
        self.last_result = Some(result);
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Parses a user identifier from a step argument.
///
/// # Errors
///
/// Returns an error when the identifier is blank.
pub fn user_id(raw: &str) -> Result<UserId, eyre::Report> {
    UserId::new(raw).map_err(|err| eyre::eyre!("invalid user id in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
