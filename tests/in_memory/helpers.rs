//! Shared test helpers for in-memory integration tests.

use mockable::DefaultClock;
use projectflow::chat::{adapters::memory::InMemoryChatRepository, services::ChatService};
use projectflow::directory::{
    adapters::memory::{InMemoryDirectoryRepository, InMemoryIdentityAdmin},
    domain::{Role, User, UserId},
    services::{RegisterUserRequest, RoleDirectoryService},
};
use projectflow::task::{
    adapters::memory::{InMemoryFileStorage, InMemoryProjectRepository, InMemoryTaskRepository},
    services::{ProjectService, TaskLifecycleService},
};
use rstest::fixture;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Directory service over in-memory adapters.
pub type Directory = RoleDirectoryService<
    InMemoryDirectoryRepository,
    InMemoryTaskRepository,
    InMemoryIdentityAdmin,
    DefaultClock,
>;

/// Project service over in-memory adapters.
pub type Projects = ProjectService<
    InMemoryProjectRepository,
    InMemoryTaskRepository,
    InMemoryDirectoryRepository,
    DefaultClock,
>;

/// Task lifecycle service over in-memory adapters.
pub type Tasks = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryProjectRepository,
    InMemoryDirectoryRepository,
    InMemoryFileStorage,
    DefaultClock,
>;

/// Chat service over in-memory adapters.
pub type Chat = ChatService<InMemoryChatRepository, InMemoryDirectoryRepository, DefaultClock>;

/// Installs a log subscriber when `RUST_LOG` is set.
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// Provides a tokio runtime for async operations in tests.
#[fixture]
pub fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create runtime")
}

/// Every service wired against one set of in-memory stores.
pub struct Workspace {
    pub identity: Arc<InMemoryIdentityAdmin>,
    pub storage: Arc<InMemoryFileStorage>,
    pub directory: Directory,
    pub projects: Projects,
    pub tasks: Tasks,
    pub chat: Chat,
}

impl Workspace {
    /// Creates a workspace with empty stores.
    pub fn new() -> Self {
        setup_logging();
        let clock = Arc::new(DefaultClock);
        let users = Arc::new(InMemoryDirectoryRepository::new());
        let identity = Arc::new(InMemoryIdentityAdmin::new());
        let project_repo = Arc::new(InMemoryProjectRepository::new());
        let task_repo = Arc::new(InMemoryTaskRepository::new());
        let storage = Arc::new(InMemoryFileStorage::new());

        Self {
            directory: RoleDirectoryService::new(
                Arc::clone(&users),
                Arc::clone(&task_repo),
                Arc::clone(&identity),
                Arc::clone(&clock),
            ),
            projects: ProjectService::new(
                Arc::clone(&project_repo),
                Arc::clone(&task_repo),
                Arc::clone(&users),
                Arc::clone(&clock),
            ),
            tasks: TaskLifecycleService::new(
                task_repo,
                project_repo,
                Arc::clone(&users),
                Arc::clone(&storage),
                Arc::clone(&clock),
            ),
            chat: ChatService::new(Arc::new(InMemoryChatRepository::new()), users, clock),
            identity,
            storage,
        }
    }

    /// Signs up the owner and registers a manager and two employees.
    ///
    /// Returns the identifiers as `(owner, manager, eve, finn)`.
    pub async fn staffed(&self) -> (UserId, UserId, UserId, UserId) {
        let owner = self
            .directory
            .sign_up(RegisterUserRequest::new("olivia", "Olivia Park", "olivia@example.com"))
            .await
            .expect("first sign-up succeeds");
        let manager = self
            .register(owner.id(), "mia", "Mia Chen", Role::Manager)
            .await;
        let eve = self
            .register(owner.id(), "eve", "Eve Adams", Role::Employee)
            .await;
        let finn = self
            .register(owner.id(), "finn", "Finn Berg", Role::Employee)
            .await;
        (owner.id().clone(), manager, eve, finn)
    }

    async fn register(&self, owner: &UserId, id: &str, name: &str, role: Role) -> UserId {
        let user: User = self
            .directory
            .register_user(
                owner,
                RegisterUserRequest::new(id, name, format!("{id}@example.com")).with_role(role),
            )
            .await
            .expect("owner registers users");
        user.id().clone()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides a fresh workspace for each test.
#[fixture]
pub fn workspace() -> Workspace {
    Workspace::new()
}
