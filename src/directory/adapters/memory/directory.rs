//! In-memory repository for users and teams.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{Team, TeamId, User, UserId},
    ports::{DirectoryRepository, DirectoryRepositoryError, DirectoryRepositoryResult},
};

/// Thread-safe in-memory directory repository.
///
/// Teams are kept in insertion order, which is the "store order" reported
/// by [`DirectoryRepository::list_teams`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectoryRepository {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    users: HashMap<UserId, User>,
    teams: Vec<Team>,
}

impl InMemoryDirectoryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> DirectoryRepositoryError {
    DirectoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectoryRepository {
    async fn store_user(&self, user: &User) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.users.contains_key(user.id()) {
            return Err(DirectoryRepositoryError::DuplicateUser(user.id().clone()));
        }
        state.users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn store_first_user(&self, user: &User) -> DirectoryRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.users.is_empty() {
            return Ok(false);
        }
        state.users.insert(user.id().clone(), user.clone());
        Ok(true)
    }

    async fn update_user(&self, user: &User) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = state
            .users
            .get_mut(user.id())
            .ok_or_else(|| DirectoryRepositoryError::UserNotFound(user.id().clone()))?;
        *slot = user.clone();
        Ok(())
    }

    async fn remove_user(&self, user_id: &UserId) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .users
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| DirectoryRepositoryError::UserNotFound(user_id.clone()))
    }

    async fn find_user(&self, user_id: &UserId) -> DirectoryRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(user_id).cloned())
    }

    async fn list_users(&self) -> DirectoryRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.values().cloned().collect())
    }

    async fn store_team(&self, team: &Team) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.teams.iter().any(|existing| existing.id() == team.id()) {
            return Err(DirectoryRepositoryError::DuplicateTeam(team.id()));
        }
        state.teams.push(team.clone());
        Ok(())
    }

    async fn update_team(&self, team: &Team) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = state
            .teams
            .iter_mut()
            .find(|existing| existing.id() == team.id())
            .ok_or(DirectoryRepositoryError::TeamNotFound(team.id()))?;
        *slot = team.clone();
        Ok(())
    }

    async fn find_team(&self, team_id: TeamId) -> DirectoryRepositoryResult<Option<Team>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.teams.iter().find(|team| team.id() == team_id).cloned())
    }

    async fn list_teams(&self) -> DirectoryRepositoryResult<Vec<Team>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.teams.clone())
    }
}
