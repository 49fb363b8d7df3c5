//! Team aggregate.

use super::{DirectoryDomainError, TeamId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A named group of users.
///
/// Members are unique. Their order carries no meaning but is preserved so
/// that lookups are stable across reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    members: Vec<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTeamData {
    /// Persisted team identifier.
    pub id: TeamId,
    /// Persisted team name.
    pub name: String,
    /// Persisted member identifiers.
    pub members: Vec<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Creates an empty team.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyTeamName`] when the name is blank.
    pub fn new(name: impl Into<String>, clock: &impl Clock) -> Result<Self, DirectoryDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DirectoryDomainError::EmptyTeamName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TeamId::new(),
            name: trimmed.to_owned(),
            members: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a team from persisted storage, dropping duplicate
    /// member entries.
    #[must_use]
    pub fn from_persisted(data: PersistedTeamData) -> Self {
        let mut members: Vec<UserId> = Vec::with_capacity(data.members.len());
        for member in data.members {
            if !members.contains(&member) {
                members.push(member);
            }
        }
        Self {
            id: data.id,
            name: data.name,
            members,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the team identifier.
    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member identifiers.
    #[must_use]
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    /// Returns `true` when the user belongs to this team.
    #[must_use]
    pub fn contains(&self, user_id: &UserId) -> bool {
        self.members.contains(user_id)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Adds a member.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::DuplicateMember`] when the user is
    /// already a member.
    pub fn add_member(
        &mut self,
        user_id: UserId,
        clock: &impl Clock,
    ) -> Result<(), DirectoryDomainError> {
        if self.contains(&user_id) {
            return Err(DirectoryDomainError::DuplicateMember {
                team_id: self.id,
                user_id,
            });
        }
        self.members.push(user_id);
        self.touch(clock);
        Ok(())
    }

    /// Removes a member.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::MemberNotFound`] when the user is not
    /// a member.
    pub fn remove_member(
        &mut self,
        user_id: &UserId,
        clock: &impl Clock,
    ) -> Result<(), DirectoryDomainError> {
        let Some(position) = self.members.iter().position(|member| member == user_id) else {
            return Err(DirectoryDomainError::MemberNotFound {
                team_id: self.id,
                user_id: user_id.clone(),
            });
        };
        self.members.remove(position);
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.updated_at);
    }
}
