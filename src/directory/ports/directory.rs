//! Synchronous identity resolution used by pure domain code.

use crate::access::Actor;
use crate::directory::domain::{DirectoryDomainError, Role, Team, User, UserId};

/// Resolves identities to users, roles and teams.
///
/// Implementations hold already-loaded data; resolution never performs I/O.
pub trait RoleDirectory {
    /// Returns the user with the given identifier.
    fn user(&self, user_id: &UserId) -> Option<&User>;

    /// Returns the first team containing the user, if any.
    fn team_of(&self, user_id: &UserId) -> Option<&Team>;

    /// Returns the role of the given user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::UnknownUser`] when the identifier does
    /// not resolve.
    fn role_of(&self, user_id: &UserId) -> Result<Role, DirectoryDomainError> {
        self.user(user_id)
            .map(User::role)
            .ok_or_else(|| DirectoryDomainError::UnknownUser(user_id.clone()))
    }

    /// Returns the users belonging to a team. Member identifiers without a
    /// matching user record are skipped.
    fn members_of(&self, team: &Team) -> Vec<&User> {
        team.members()
            .iter()
            .filter_map(|member| self.user(member))
            .collect()
    }

    /// Resolves the acting user together with their current role.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::UnknownUser`] when the identifier does
    /// not resolve.
    fn actor(&self, user_id: &UserId) -> Result<Actor, DirectoryDomainError> {
        let role = self.role_of(user_id)?;
        Ok(Actor::new(user_id.clone(), role))
    }
}
