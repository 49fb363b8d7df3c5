//! Repository port for user and team persistence.

use crate::directory::domain::{Team, TeamId, User, UserId};
use crate::error::ErrorKind;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory repository operations.
pub type DirectoryRepositoryResult<T> = Result<T, DirectoryRepositoryError>;

/// User and team persistence contract.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DuplicateUser`] when the id is
    /// already taken.
    async fn store_user(&self, user: &User) -> DirectoryRepositoryResult<()>;

    /// Stores the user only if the directory holds no users yet.
    ///
    /// Returns `false`, storing nothing, when any user already exists.
    /// Implementations must make the emptiness check and the insert one
    /// atomic step so that concurrent first sign-ups yield a single owner.
    async fn store_first_user(&self, user: &User) -> DirectoryRepositoryResult<bool>;

    /// Persists changes to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::UserNotFound`] when the user does
    /// not exist.
    async fn update_user(&self, user: &User) -> DirectoryRepositoryResult<()>;

    /// Removes a user record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::UserNotFound`] when the user does
    /// not exist.
    async fn remove_user(&self, user_id: &UserId) -> DirectoryRepositoryResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_user(&self, user_id: &UserId) -> DirectoryRepositoryResult<Option<User>>;

    /// Returns all users.
    async fn list_users(&self) -> DirectoryRepositoryResult<Vec<User>>;

    /// Stores a new team.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DuplicateTeam`] when the id is
    /// already taken.
    async fn store_team(&self, team: &Team) -> DirectoryRepositoryResult<()>;

    /// Persists changes to an existing team.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::TeamNotFound`] when the team does
    /// not exist.
    async fn update_team(&self, team: &Team) -> DirectoryRepositoryResult<()>;

    /// Finds a team by identifier.
    ///
    /// Returns `None` when the team does not exist.
    async fn find_team(&self, team_id: TeamId) -> DirectoryRepositoryResult<Option<Team>>;

    /// Returns all teams in store order.
    async fn list_teams(&self) -> DirectoryRepositoryResult<Vec<Team>>;
}

/// Errors returned by directory repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryRepositoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// A team with the same identifier already exists.
    #[error("duplicate team identifier: {0}")]
    DuplicateTeam(TeamId),

    /// The user was not found.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The team was not found.
    #[error("team not found: {0}")]
    TeamNotFound(TeamId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateUser(_) | Self::DuplicateTeam(_) => ErrorKind::Validation,
            Self::UserNotFound(_) | Self::TeamNotFound(_) => ErrorKind::NotFound,
            Self::Persistence(_) => ErrorKind::Persistence,
        }
    }
}
