//! Service layer for task creation, movement, edits, comments and
//! attachments.

use super::Board;
use crate::access::{AccessDenied, AccessPolicy, Actor, Operation, authorize, log_denial};
use crate::config::BoardConfig;
use crate::directory::{
    domain::{DirectoryDomainError, DirectorySnapshot, UserId},
    ports::{DirectoryRepository, DirectoryRepositoryError, RoleDirectory},
    services::load_snapshot,
};
use crate::error::ErrorKind;
use crate::task::{
    domain::{
        AttachmentId, Column, FileRef, NewTask, ProjectId, Task, TaskDomainError, TaskId,
        TaskLifecycle, TaskPatch,
    },
    ports::{
        FileStorage, FileStorageError, FileUpload, ProjectRepository, ProjectRepositoryError,
        TaskRepository, TaskRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or authorization failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The acting user does not resolve.
    #[error(transparent)]
    Directory(#[from] DirectoryDomainError),
    /// Directory lookup failed.
    #[error(transparent)]
    DirectoryRepository(#[from] DirectoryRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Project repository operation failed.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),
    /// File upload failed.
    #[error(transparent)]
    Storage(#[from] FileStorageError),
    /// The upload exceeds the configured attachment size.
    #[error("attachment has {actual} bytes, exceeds limit of {max}")]
    AttachmentTooLarge {
        /// Configured maximum.
        max: usize,
        /// Actual size.
        actual: usize,
    },
}

impl TaskLifecycleError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::Directory(err) => err.kind(),
            Self::DirectoryRepository(err) => err.kind(),
            Self::Repository(err) => err.kind(),
            Self::ProjectRepository(err) => err.kind(),
            Self::Storage(err) => err.kind(),
            Self::AttachmentTooLarge { .. } => ErrorKind::Validation,
        }
    }
}

impl From<AccessDenied> for TaskLifecycleError {
    fn from(denied: AccessDenied) -> Self {
        Self::Domain(TaskDomainError::PermissionDenied(denied))
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Each call loads a fresh directory snapshot, resolves the acting user's
/// current role, runs the pure [`TaskLifecycle`] operation and persists the
/// result.
#[derive(Clone)]
pub struct TaskLifecycleService<R, P, D, S, C>
where
    R: TaskRepository,
    P: ProjectRepository,
    D: DirectoryRepository,
    S: FileStorage,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    projects: Arc<P>,
    directory: Arc<D>,
    storage: Arc<S>,
    clock: Arc<C>,
    lifecycle: TaskLifecycle,
}

impl<R, P, D, S, C> TaskLifecycleService<R, P, D, S, C>
where
    R: TaskRepository,
    P: ProjectRepository,
    D: DirectoryRepository,
    S: FileStorage,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with default limits.
    #[must_use]
    pub fn new(
        tasks: Arc<R>,
        projects: Arc<P>,
        directory: Arc<D>,
        storage: Arc<S>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            projects,
            directory,
            storage,
            clock,
            lifecycle: TaskLifecycle::default(),
        }
    }

    /// Replaces the board limits.
    #[must_use]
    pub const fn with_config(mut self, config: BoardConfig) -> Self {
        self.lifecycle = TaskLifecycle::new(config);
        self
    }

    /// Returns the board limits in effect.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        self.lifecycle.config()
    }

    /// Creates a task in the `todo` column of a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnresolvedProject`] when the project does
    /// not exist, plus the permission and validation errors of
    /// [`TaskLifecycle::create_task`].
    pub async fn create_task(
        &self,
        acting: &UserId,
        project_id: ProjectId,
        request: NewTask,
    ) -> TaskLifecycleResult<Task> {
        let (snapshot, actor) = self.resolve(acting).await?;
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or(TaskDomainError::UnresolvedProject(project_id))?;

        let task = self
            .lifecycle
            .create_task(&project, request, &actor, &snapshot, &*self.clock)
            .inspect_err(log_domain_denial)?;
        self.tasks.store(&task).await?;
        info!(acting = %acting, task_id = %task.id(), %project_id, "task created");
        Ok(task)
    }

    /// Moves a task to another column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PermissionDenied`] unless the acting user
    /// is a manager, an owner or the task's assignee, and
    /// [`TaskRepositoryError::NotFound`] for an unknown task.
    pub async fn move_task(
        &self,
        acting: &UserId,
        task_id: TaskId,
        target: Column,
    ) -> TaskLifecycleResult<Task> {
        let (_, actor) = self.resolve(acting).await?;
        let task = self.load(task_id).await?;
        let from = task.column();

        let moved = self
            .lifecycle
            .move_task(&task, target, &actor, &*self.clock)
            .inspect_err(log_domain_denial)?;
        self.tasks.update(&moved).await?;
        info!(acting = %acting, %task_id, %from, to = %target, "task moved");
        Ok(moved)
    }

    /// Applies a field patch as a single all-or-nothing edit.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`TaskLifecycle::update_fields`] and
    /// [`TaskRepositoryError::NotFound`] for an unknown task.
    pub async fn update_fields(
        &self,
        acting: &UserId,
        task_id: TaskId,
        patch: &TaskPatch,
    ) -> TaskLifecycleResult<Task> {
        let (snapshot, actor) = self.resolve(acting).await?;
        let task = self.load(task_id).await?;

        let updated = self
            .lifecycle
            .update_fields(&task, patch, &actor, &snapshot, &*self.clock)
            .inspect_err(log_domain_denial)?;
        if patch.is_empty() {
            debug!(%task_id, "empty patch ignored");
            return Ok(updated);
        }
        self.tasks.update(&updated).await?;
        info!(acting = %acting, %task_id, fields = ?patch.fields(), "task fields updated");
        Ok(updated)
    }

    /// Appends a comment authored by the acting user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyComment`] or
    /// [`TaskDomainError::CommentTooLong`] for invalid text.
    pub async fn add_comment(
        &self,
        acting: &UserId,
        task_id: TaskId,
        text: &str,
    ) -> TaskLifecycleResult<Task> {
        let snapshot = load_snapshot(&*self.directory).await?;
        let author = snapshot
            .user(acting)
            .ok_or_else(|| DirectoryDomainError::UnknownUser(acting.clone()))?;
        let task = self.load(task_id).await?;

        let updated = self
            .lifecycle
            .add_comment(&task, author, text, &*self.clock)
            .inspect_err(log_domain_denial)?;
        self.tasks.update(&updated).await?;
        info!(acting = %acting, %task_id, "comment added");
        Ok(updated)
    }

    /// Uploads a file and attaches it to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AttachmentTooLarge`] before anything is
    /// uploaded when the payload exceeds the limit,
    /// [`TaskLifecycleError::Storage`] when the upload fails, and
    /// [`TaskLifecycleError::Repository`] when the task cannot be saved. In
    /// that last case the uploaded bytes are deleted again.
    pub async fn attach_file(
        &self,
        acting: &UserId,
        task_id: TaskId,
        upload: FileUpload,
    ) -> TaskLifecycleResult<Task> {
        let max = self.config().max_attachment_bytes;
        if upload.len() > max {
            return Err(TaskLifecycleError::AttachmentTooLarge {
                max,
                actual: upload.len(),
            });
        }
        let (_, actor) = self.resolve(acting).await?;
        let task = self.load(task_id).await?;
        authorize(&actor, &Operation::Attach)?;

        let file = self.storage.upload(task_id, &upload).await?;
        let updated = self
            .lifecycle
            .add_attachment(&task, &actor, file.clone(), &*self.clock)
            .inspect_err(log_domain_denial)?;
        if let Err(err) = self.tasks.update(&updated).await {
            self.discard_upload(&file).await;
            return Err(err.into());
        }
        info!(
            acting = %acting,
            %task_id,
            file_name = upload.file_name(),
            bytes = upload.len(),
            "attachment added"
        );
        Ok(updated)
    }

    /// Removes an attachment from a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AttachmentNotFound`] when absent and
    /// [`TaskDomainError::PermissionDenied`] unless the acting user uploaded
    /// it or is a manager or owner.
    pub async fn remove_attachment(
        &self,
        acting: &UserId,
        task_id: TaskId,
        attachment_id: AttachmentId,
    ) -> TaskLifecycleResult<Task> {
        let (_, actor) = self.resolve(acting).await?;
        let task = self.load(task_id).await?;

        let updated = self
            .lifecycle
            .remove_attachment(&task, &actor, attachment_id, &*self.clock)
            .inspect_err(log_domain_denial)?;
        self.tasks.update(&updated).await?;
        info!(acting = %acting, %task_id, %attachment_id, "attachment removed");
        Ok(updated)
    }

    /// Retrieves a task the acting user may view.
    ///
    /// Returns `Ok(None)` when no task has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PermissionDenied`] when the task exists but
    /// is not visible to the acting user.
    pub async fn find_task(
        &self,
        acting: &UserId,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Option<Task>> {
        let (_, actor) = self.resolve(acting).await?;
        let Some(task) = self.tasks.find_by_id(task_id).await? else {
            debug!(%task_id, "task not found");
            return Ok(None);
        };
        authorize(&actor, &Operation::ViewTask(&task))?;
        Ok(Some(task))
    }

    /// Returns the tasks assigned to the acting user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Directory`] when the acting user does
    /// not resolve, or repository errors.
    pub async fn my_tasks(&self, acting: &UserId) -> TaskLifecycleResult<Vec<Task>> {
        self.resolve(acting).await?;
        let tasks = self.tasks.list_by_assignee(acting).await?;
        debug!(acting = %acting, count = tasks.len(), "listed assigned tasks");
        Ok(tasks)
    }

    /// Returns a project's board restricted to the tasks the acting user
    /// may view.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnresolvedProject`] when the project does
    /// not exist.
    pub async fn board(
        &self,
        acting: &UserId,
        project_id: ProjectId,
    ) -> TaskLifecycleResult<Board> {
        let (_, actor) = self.resolve(acting).await?;
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or(TaskDomainError::UnresolvedProject(project_id))?;
        let visible = self
            .tasks
            .list_by_project(project_id)
            .await?
            .into_iter()
            .filter(|task| AccessPolicy::permits(&actor, &Operation::ViewTask(task)));
        let board = Board::new(project, visible);
        debug!(acting = %acting, %project_id, tasks = board.len(), "board loaded");
        Ok(board)
    }

    async fn discard_upload(&self, file: &FileRef) {
        if let Err(err) = self.storage.delete(file).await {
            warn!(url = file.url(), error = %err, "orphaned attachment upload left in storage");
        }
    }

    async fn resolve(&self, acting: &UserId) -> TaskLifecycleResult<(DirectorySnapshot, Actor)> {
        let snapshot = load_snapshot(&*self.directory).await?;
        let actor = snapshot.actor(acting)?;
        Ok((snapshot, actor))
    }

    async fn load(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(task_id).into())
    }
}

fn log_domain_denial(err: &TaskDomainError) {
    if let TaskDomainError::PermissionDenied(denied) = err {
        log_denial(denied);
    }
}
