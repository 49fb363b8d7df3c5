//! Point-in-time read model of the directory.

use super::{Team, User, UserId};
use crate::directory::ports::RoleDirectory;
use std::collections::HashMap;

/// Users and teams loaded from the data store for a single operation.
///
/// Services build a fresh snapshot for every request, so a role change is
/// visible to the very next policy check.
#[derive(Debug, Clone, Default)]
pub struct DirectorySnapshot {
    users: HashMap<UserId, User>,
    teams: Vec<Team>,
}

impl DirectorySnapshot {
    /// Creates a snapshot. Teams keep the order in which they are supplied;
    /// that order decides which team [`RoleDirectory::team_of`] reports.
    #[must_use]
    pub fn new(
        users: impl IntoIterator<Item = User>,
        teams: impl IntoIterator<Item = Team>,
    ) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.id().clone(), user))
                .collect(),
            teams: teams.into_iter().collect(),
        }
    }

    /// Returns every user in the snapshot.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Returns every team in store order.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }
}

impl RoleDirectory for DirectorySnapshot {
    fn user(&self, user_id: &UserId) -> Option<&User> {
        self.users.get(user_id)
    }

    fn team_of(&self, user_id: &UserId) -> Option<&Team> {
        self.teams.iter().find(|team| team.contains(user_id))
    }
}
