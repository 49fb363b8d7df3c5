//! Constraint and ordering behaviour of the in-memory adapters.

use super::helpers::runtime;
use mockable::DefaultClock;
use projectflow::chat::{
    adapters::memory::InMemoryChatRepository,
    domain::{ChatChannel, ChatMessage},
    ports::{ChatRepository, ChatRepositoryError},
};
use projectflow::directory::domain::{Role, TeamId, User, UserId};
use projectflow::task::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    domain::{NewTask, Project, Task, TaskLifecycle, TaskPatch},
    ports::{ProjectRepository, TaskRepository, TaskRepositoryError},
};
use projectflow::{access::Actor, directory::domain::DirectorySnapshot};
use rstest::rstest;
use tokio::runtime::Runtime;

fn user(id: &str, role: Role) -> User {
    User::new(
        UserId::new(id).expect("valid uid"),
        id,
        format!("{id}@example.com"),
        role,
        &DefaultClock,
    )
    .expect("valid user")
}

fn task_for(project: &Project, assignee: Option<&User>) -> Task {
    let manager = user("mia", Role::Manager);
    let users: Vec<User> = assignee.into_iter().cloned().collect();
    let snapshot = DirectorySnapshot::new(users, Vec::new());
    let mut request = NewTask::new("Task");
    if let Some(assigned) = assignee {
        request = request.with_assignee(assigned.id().clone());
    }
    TaskLifecycle::default()
        .create_task(project, request, &Actor::from(&manager), &snapshot, &DefaultClock)
        .expect("valid task")
}

fn project() -> Project {
    Project::new("Launch", UserId::new("mia").expect("valid uid"), &DefaultClock)
        .expect("valid project")
}

#[rstest]
fn storing_a_task_twice_is_rejected(runtime: Runtime) {
    let repo = InMemoryTaskRepository::new();
    let task = task_for(&project(), None);

    runtime.block_on(async {
        repo.store(&task).await.expect("first store succeeds");
        let err = repo.store(&task).await.expect_err("duplicate rejected");
        assert!(matches!(err, TaskRepositoryError::DuplicateTask(id) if id == task.id()));
    });
}

#[rstest]
fn updating_an_unknown_task_is_not_found(runtime: Runtime) {
    let repo = InMemoryTaskRepository::new();
    let task = task_for(&project(), None);

    runtime.block_on(async {
        let err = repo.update(&task).await.expect_err("missing task");
        assert!(matches!(err, TaskRepositoryError::NotFound(id) if id == task.id()));
    });
}

#[rstest]
fn project_listing_keeps_creation_order_of_tasks(runtime: Runtime) {
    let repo = InMemoryTaskRepository::new();
    let launch = project();
    let tasks: Vec<Task> = (0..3).map(|_| task_for(&launch, None)).collect();

    runtime.block_on(async {
        for task in &tasks {
            repo.store(task).await.expect("store succeeds");
        }
        let listed = repo
            .list_by_project(launch.id())
            .await
            .expect("listing succeeds");
        let listed_ids: Vec<_> = listed.iter().map(Task::id).collect();
        let stored_ids: Vec<_> = tasks.iter().map(Task::id).collect();
        assert_eq!(listed_ids, stored_ids);
    });
}

#[rstest]
fn assignee_index_follows_reassignment(runtime: Runtime) {
    let repo = InMemoryTaskRepository::new();
    let manager = user("mia", Role::Manager);
    let eve = user("eve", Role::Employee);
    let finn = user("finn", Role::Employee);
    let snapshot = DirectorySnapshot::new([eve.clone(), finn.clone()], Vec::new());
    let original = task_for(&project(), Some(&eve));
    let reassigned = TaskLifecycle::default()
        .update_fields(
            &original,
            &TaskPatch::new().with_assignee(Some(finn.id().clone())),
            &Actor::from(&manager),
            &snapshot,
            &DefaultClock,
        )
        .expect("managers reassign");

    runtime.block_on(async {
        repo.store(&original).await.expect("store succeeds");
        repo.update(&reassigned).await.expect("update succeeds");

        let for_eve = repo.list_by_assignee(eve.id()).await.expect("listing");
        let for_finn = repo.list_by_assignee(finn.id()).await.expect("listing");
        assert!(for_eve.is_empty());
        assert_eq!(for_finn, vec![reassigned]);
    });
}

#[rstest]
fn projects_are_listed_newest_first(runtime: Runtime) {
    let repo = InMemoryProjectRepository::new();
    let older = project();
    let newer = project();

    runtime.block_on(async {
        repo.store(&older).await.expect("store succeeds");
        repo.store(&newer).await.expect("store succeeds");
        let listed = repo.list().await.expect("listing succeeds");
        assert_eq!(listed.len(), 2);
        assert!(
            listed
                .iter()
                .zip(listed.iter().skip(1))
                .all(|(earlier, later)| earlier.created_at() >= later.created_at())
        );
    });
}

#[rstest]
fn chat_messages_are_appended_once(runtime: Runtime) {
    let repo = InMemoryChatRepository::new();
    let eve = user("eve", Role::Employee);
    let channel = ChatChannel::Team(TeamId::new());
    let message =
        ChatMessage::new(channel.clone(), &eve, "hello", 100, &DefaultClock).expect("valid");

    runtime.block_on(async {
        repo.append(&message).await.expect("append succeeds");
        let err = repo.append(&message).await.expect_err("duplicate rejected");
        assert!(matches!(err, ChatRepositoryError::DuplicateMessage(id) if id == message.id()));
        let listed = repo.list_channel(&channel).await.expect("listing succeeds");
        assert_eq!(listed, vec![message]);
    });
}
