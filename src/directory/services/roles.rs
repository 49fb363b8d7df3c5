//! Service layer for user registration, role changes and team membership.

use super::load_snapshot;
use crate::access::{AccessDenied, Operation, authorize};
use crate::directory::{
    domain::{DirectoryDomainError, DirectorySnapshot, Role, Team, TeamId, User, UserId},
    ports::{
        DirectoryRepository, DirectoryRepositoryError, IdentityAdmin, IdentityAdminError,
        RoleDirectory,
    },
};
use crate::error::ErrorKind;
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    user_id: String,
    display_name: String,
    email: String,
    role: Role,
}

impl RegisterUserRequest {
    /// Creates a request for an employee account.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            email: email.into(),
            role: Role::Employee,
        }
    }

    /// Sets the initial role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Service-level errors for directory operations.
#[derive(Debug, Error)]
pub enum RoleDirectoryError {
    /// Domain validation or resolution failed.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),
    /// The access policy rejected the operation.
    #[error(transparent)]
    PermissionDenied(#[from] AccessDenied),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DirectoryRepositoryError),
    /// The identity provider rejected the account deletion.
    #[error(transparent)]
    Identity(#[from] IdentityAdminError),
    /// Releasing a deleted user's tasks failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

impl RoleDirectoryError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::PermissionDenied(err) => err.kind(),
            Self::Repository(err) => err.kind(),
            Self::Identity(err) => err.kind(),
            Self::Tasks(err) => err.kind(),
        }
    }
}

/// Result type for directory service operations.
pub type RoleDirectoryResult<T> = Result<T, RoleDirectoryError>;

/// User, role and team orchestration service.
///
/// Every call re-reads the acting user's role from the repository.
#[derive(Clone)]
pub struct RoleDirectoryService<D, R, I, C>
where
    D: DirectoryRepository,
    R: TaskRepository,
    I: IdentityAdmin,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    tasks: Arc<R>,
    identity: Arc<I>,
    clock: Arc<C>,
}

impl<D, R, I, C> RoleDirectoryService<D, R, I, C>
where
    D: DirectoryRepository,
    R: TaskRepository,
    I: IdentityAdmin,
    C: Clock + Send + Sync,
{
    /// Creates a new directory service.
    #[must_use]
    pub const fn new(
        directory: Arc<D>,
        tasks: Arc<R>,
        identity: Arc<I>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            directory,
            tasks,
            identity,
            clock,
        }
    }

    /// Loads a fresh snapshot of users and teams.
    ///
    /// # Errors
    ///
    /// Returns [`RoleDirectoryError::Repository`] when the store fails.
    pub async fn snapshot(&self) -> RoleDirectoryResult<DirectorySnapshot> {
        Ok(load_snapshot(&*self.directory).await?)
    }

    /// Returns the current role of a user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::UnknownUser`] when the user does not
    /// exist.
    pub async fn role_of(&self, user_id: &UserId) -> RoleDirectoryResult<Role> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.role_of(user_id)?)
    }

    /// Returns the first team containing the user.
    ///
    /// # Errors
    ///
    /// Returns [`RoleDirectoryError::Repository`] when the store fails.
    pub async fn team_of(&self, user_id: &UserId) -> RoleDirectoryResult<Option<Team>> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.team_of(user_id).cloned())
    }

    /// Returns the user records of a team's members.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::UnknownTeam`] when the team does not
    /// exist.
    pub async fn members_of(&self, team_id: TeamId) -> RoleDirectoryResult<Vec<User>> {
        let snapshot = self.snapshot().await?;
        let team = snapshot
            .teams()
            .iter()
            .find(|team| team.id() == team_id)
            .ok_or(DirectoryDomainError::UnknownTeam(team_id))?;
        debug!(%team_id, members = team.members().len(), "listing team members");
        Ok(snapshot.members_of(team).into_iter().cloned().collect())
    }

    /// Creates the directory record for a freshly authenticated identity.
    ///
    /// The first user of an empty directory becomes the owner; everyone
    /// after that starts as an employee. The owner slot is claimed through
    /// [`DirectoryRepository::store_first_user`], so two racing sign-ups
    /// cannot both become owner.
    ///
    /// # Errors
    ///
    /// Returns [`RoleDirectoryError::Domain`] when the identity fields are
    /// invalid, or [`DirectoryRepositoryError::DuplicateUser`] when the
    /// record already exists.
    pub async fn sign_up(&self, request: RegisterUserRequest) -> RoleDirectoryResult<User> {
        let owner = self.build_user(request.clone().with_role(Role::Owner))?;
        let user = if self.directory.store_first_user(&owner).await? {
            owner
        } else {
            let employee = self.build_user(request.with_role(Role::Employee))?;
            self.directory.store_user(&employee).await?;
            employee
        };
        info!(user_id = %user.id(), role = %user.role(), "user signed up");
        Ok(user)
    }

    /// Creates a user record with an explicit role. Owner only.
    ///
    /// # Errors
    ///
    /// Returns [`RoleDirectoryError::PermissionDenied`] unless the acting
    /// user is an owner, plus validation and repository errors.
    pub async fn register_user(
        &self,
        acting: &UserId,
        request: RegisterUserRequest,
    ) -> RoleDirectoryResult<User> {
        let snapshot = self.snapshot().await?;
        let actor = snapshot.actor(acting)?;
        authorize(&actor, &Operation::ManageUsers)?;

        let user = self.build_user(request)?;
        self.directory.store_user(&user).await?;
        info!(acting = %acting, user_id = %user.id(), role = %user.role(), "user registered");
        Ok(user)
    }

    /// Changes another user's role. Owner only; an owner may not change
    /// their own role.
    ///
    /// # Errors
    ///
    /// Returns [`RoleDirectoryError::PermissionDenied`] for a self change,
    /// a no-op change or a non-owner actor, and
    /// [`DirectoryDomainError::UnknownUser`] when the target does not exist.
    pub async fn change_role(
        &self,
        acting: &UserId,
        target_id: &UserId,
        new_role: Role,
    ) -> RoleDirectoryResult<User> {
        let snapshot = self.snapshot().await?;
        let actor = snapshot.actor(acting)?;
        let target = snapshot
            .user(target_id)
            .ok_or_else(|| DirectoryDomainError::UnknownUser(target_id.clone()))?;
        authorize(&actor, &Operation::ChangeRole { target, new_role })?;

        let mut updated = target.clone();
        let previous = updated.role();
        updated.change_role(new_role, &*self.clock);
        self.directory.update_user(&updated).await?;
        info!(acting = %acting, user_id = %target_id, from = %previous, to = %new_role, "role changed");
        Ok(updated)
    }

    /// Deletes another user. Owner only; an owner may not delete
    /// themself.
    ///
    /// The authentication account is deleted first through
    /// [`IdentityAdmin`]. Only after that succeeds are the user's tasks
    /// unassigned, their team memberships dropped and the directory record
    /// removed, so no task is left pointing at a missing user.
    ///
    /// # Errors
    ///
    /// Returns [`RoleDirectoryError::PermissionDenied`] for self deletion or
    /// a non-owner actor, [`RoleDirectoryError::Identity`] when the provider
    /// fails, [`RoleDirectoryError::Tasks`] when a task cannot be released,
    /// and repository errors.
    pub async fn delete_user(&self, acting: &UserId, target_id: &UserId) -> RoleDirectoryResult<()> {
        let snapshot = self.snapshot().await?;
        let actor = snapshot.actor(acting)?;
        let target = snapshot
            .user(target_id)
            .ok_or_else(|| DirectoryDomainError::UnknownUser(target_id.clone()))?;
        authorize(&actor, &Operation::DeleteUser(target))?;

        self.identity.delete_account(target_id).await?;
        for mut task in self.tasks.list_by_assignee(target_id).await? {
            task.release_assignee(&*self.clock);
            self.tasks.update(&task).await?;
            info!(user_id = %target_id, task_id = %task.id(), "task unassigned from deleted user");
        }
        for team in snapshot.teams().iter().filter(|team| team.contains(target_id)) {
            let mut updated = team.clone();
            updated.remove_member(target_id, &*self.clock)?;
            self.directory.update_team(&updated).await?;
        }
        self.directory.remove_user(target_id).await?;
        info!(acting = %acting, user_id = %target_id, "user deleted");
        Ok(())
    }

    /// Creates an empty team. Managers and owners only.
    ///
    /// # Errors
    ///
    /// Returns [`RoleDirectoryError::PermissionDenied`] for employees and
    /// [`DirectoryDomainError::EmptyTeamName`] for a blank name.
    pub async fn create_team(&self, acting: &UserId, name: &str) -> RoleDirectoryResult<Team> {
        let snapshot = self.snapshot().await?;
        let actor = snapshot.actor(acting)?;
        authorize(&actor, &Operation::ManageTeam)?;

        let team = Team::new(name, &*self.clock)?;
        self.directory.store_team(&team).await?;
        info!(acting = %acting, team_id = %team.id(), "team created");
        Ok(team)
    }

    /// Adds a user to a team. Managers and owners only.
    ///
    /// # Errors
    ///
    /// Returns [`RoleDirectoryError::PermissionDenied`] for employees,
    /// [`DirectoryDomainError::UnknownUser`] or
    /// [`DirectoryDomainError::UnknownTeam`] for dangling references, and
    /// [`DirectoryDomainError::DuplicateMember`] when already a member.
    pub async fn add_team_member(
        &self,
        acting: &UserId,
        team_id: TeamId,
        member: &UserId,
    ) -> RoleDirectoryResult<Team> {
        let mut team = self.team_for_update(acting, team_id).await?;
        if self.directory.find_user(member).await?.is_none() {
            return Err(DirectoryDomainError::UnknownUser(member.clone()).into());
        }
        team.add_member(member.clone(), &*self.clock)?;
        self.directory.update_team(&team).await?;
        info!(acting = %acting, %team_id, user_id = %member, "team member added");
        Ok(team)
    }

    /// Removes a user from a team. Managers and owners only.
    ///
    /// # Errors
    ///
    /// Returns [`RoleDirectoryError::PermissionDenied`] for employees,
    /// [`DirectoryDomainError::UnknownTeam`] for an unknown team, and
    /// [`DirectoryDomainError::MemberNotFound`] when not a member.
    pub async fn remove_team_member(
        &self,
        acting: &UserId,
        team_id: TeamId,
        member: &UserId,
    ) -> RoleDirectoryResult<Team> {
        let mut team = self.team_for_update(acting, team_id).await?;
        team.remove_member(member, &*self.clock)?;
        self.directory.update_team(&team).await?;
        info!(acting = %acting, %team_id, user_id = %member, "team member removed");
        Ok(team)
    }

    async fn team_for_update(&self, acting: &UserId, team_id: TeamId) -> RoleDirectoryResult<Team> {
        let snapshot = self.snapshot().await?;
        let actor = snapshot.actor(acting)?;
        authorize(&actor, &Operation::ManageTeam)?;
        snapshot
            .teams()
            .iter()
            .find(|team| team.id() == team_id)
            .cloned()
            .ok_or_else(|| DirectoryDomainError::UnknownTeam(team_id).into())
    }

    fn build_user(&self, request: RegisterUserRequest) -> RoleDirectoryResult<User> {
        let RegisterUserRequest {
            user_id,
            display_name,
            email,
            role,
        } = request;
        let id = UserId::new(user_id)?;
        Ok(User::new(id, display_name, email, role, &*self.clock)?)
    }
}
