//! Service layer for projects and their assigned users.

use crate::access::{AccessDenied, AccessPolicy, Actor, Operation, authorize};
use crate::directory::{
    domain::{DirectoryDomainError, UserId},
    ports::{DirectoryRepository, DirectoryRepositoryError, RoleDirectory},
    services::load_snapshot,
};
use crate::error::ErrorKind;
use crate::task::{
    domain::{Project, ProjectId, Task, TaskDomainError},
    ports::{ProjectRepository, ProjectRepositoryError, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The access policy rejected the operation.
    #[error(transparent)]
    PermissionDenied(#[from] AccessDenied),
    /// A referenced user does not resolve.
    #[error(transparent)]
    Directory(#[from] DirectoryDomainError),
    /// Directory lookup failed.
    #[error(transparent)]
    DirectoryRepository(#[from] DirectoryRepositoryError),
    /// Project repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

impl ProjectServiceError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::PermissionDenied(err) => err.kind(),
            Self::Directory(err) => err.kind(),
            Self::DirectoryRepository(err) => err.kind(),
            Self::Repository(err) => err.kind(),
            Self::Tasks(err) => err.kind(),
        }
    }
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project creation, assignment and visibility service.
#[derive(Clone)]
pub struct ProjectService<P, R, D, C>
where
    P: ProjectRepository,
    R: TaskRepository,
    D: DirectoryRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<R>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<P, R, D, C> ProjectService<P, R, D, C>
where
    P: ProjectRepository,
    R: TaskRepository,
    D: DirectoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<R>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            projects,
            tasks,
            directory,
            clock,
        }
    }

    /// Creates a project. Managers and owners only.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::PermissionDenied`] for employees and
    /// [`TaskDomainError::EmptyProjectName`] for a blank name.
    pub async fn create_project(
        &self,
        acting: &UserId,
        name: &str,
    ) -> ProjectServiceResult<Project> {
        let actor = self.resolve(acting).await?;
        authorize(&actor, &Operation::CreateProject)?;

        let project = Project::new(name, acting.clone(), &*self.clock)?;
        self.projects.store(&project).await?;
        info!(acting = %acting, project_id = %project.id(), "project created");
        Ok(project)
    }

    /// Assigns a user to a project. Assigning twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::PermissionDenied`] for employees,
    /// [`DirectoryDomainError::UnknownUser`] for an unknown user and
    /// [`ProjectRepositoryError::NotFound`] for an unknown project.
    pub async fn assign_user(
        &self,
        acting: &UserId,
        project_id: ProjectId,
        user_id: &UserId,
    ) -> ProjectServiceResult<Project> {
        let snapshot = load_snapshot(&*self.directory).await?;
        let actor = snapshot.actor(acting)?;
        let mut project = self.load(project_id).await?;
        authorize(&actor, &Operation::ManageProject(&project))?;
        if snapshot.user(user_id).is_none() {
            return Err(DirectoryDomainError::UnknownUser(user_id.clone()).into());
        }

        if project.assign_user(user_id.clone(), &*self.clock) {
            self.projects.update(&project).await?;
            info!(acting = %acting, %project_id, user_id = %user_id, "user assigned to project");
        }
        Ok(project)
    }

    /// Removes a user from a project. Unassigning an absent user is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::PermissionDenied`] for employees and
    /// [`ProjectRepositoryError::NotFound`] for an unknown project.
    pub async fn unassign_user(
        &self,
        acting: &UserId,
        project_id: ProjectId,
        user_id: &UserId,
    ) -> ProjectServiceResult<Project> {
        let actor = self.resolve(acting).await?;
        let mut project = self.load(project_id).await?;
        authorize(&actor, &Operation::ManageProject(&project))?;

        if project.unassign_user(user_id, &*self.clock) {
            self.projects.update(&project).await?;
            info!(acting = %acting, %project_id, user_id = %user_id, "user unassigned from project");
        }
        Ok(project)
    }

    /// Lists the projects visible to the acting user, newest first.
    ///
    /// Managers and owners see every project. Employees see projects they
    /// are assigned to or hold a task in.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::UnknownUser`] when the acting user
    /// does not resolve, or repository errors.
    pub async fn visible_projects(&self, acting: &UserId) -> ProjectServiceResult<Vec<Project>> {
        let actor = self.resolve(acting).await?;
        let holding: HashSet<ProjectId> = self
            .tasks
            .list_by_assignee(acting)
            .await?
            .iter()
            .map(Task::project_id)
            .collect();
        let visible: Vec<Project> = self
            .projects
            .list()
            .await?
            .into_iter()
            .filter(|project| {
                AccessPolicy::permits(
                    &actor,
                    &Operation::ViewProject {
                        project,
                        holds_task: holding.contains(&project.id()),
                    },
                )
            })
            .collect();
        debug!(acting = %acting, count = visible.len(), "listed visible projects");
        Ok(visible)
    }

    async fn resolve(&self, acting: &UserId) -> ProjectServiceResult<Actor> {
        let snapshot = load_snapshot(&*self.directory).await?;
        Ok(snapshot.actor(acting)?)
    }

    async fn load(&self, project_id: ProjectId) -> ProjectServiceResult<Project> {
        self.projects
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| ProjectRepositoryError::NotFound(project_id).into())
    }
}
