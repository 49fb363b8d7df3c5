//! Project aggregate.

use super::{ProjectId, TaskDomainError};
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A project grouping tasks on one board.
///
/// `assigned_user_ids` is a denormalized, duplicate-free list used to
/// decide which projects an employee sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    created_by: UserId,
    assigned_user_ids: Vec<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project name.
    pub name: String,
    /// Persisted creator.
    pub created_by: UserId,
    /// Persisted assigned users.
    pub assigned_user_ids: Vec<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a project with no assigned users.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyProjectName`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        created_by: UserId,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyProjectName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: ProjectId::new(),
            name: trimmed.to_owned(),
            created_by,
            assigned_user_ids: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            created_by: data.created_by,
            assigned_user_ids: data.assigned_user_ids,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creator's identifier.
    #[must_use]
    pub const fn created_by(&self) -> &UserId {
        &self.created_by
    }

    /// Returns the assigned users.
    #[must_use]
    pub fn assigned_user_ids(&self) -> &[UserId] {
        &self.assigned_user_ids
    }

    /// Returns `true` when the user is assigned to this project.
    #[must_use]
    pub fn is_assigned(&self, user_id: &UserId) -> bool {
        self.assigned_user_ids.contains(user_id)
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

    /// Assigns a user. Returns `false` when the user was already assigned.
    pub fn assign_user(&mut self, user_id: UserId, clock: &impl Clock) -> bool {
        if self.is_assigned(&user_id) {
            return false;
        }
        self.assigned_user_ids.push(user_id);
        self.updated_at = clock.utc().max(self.updated_at);
        true
    }

    /// Unassigns a user. Returns `false` when the user was not assigned.
    pub fn unassign_user(&mut self, user_id: &UserId, clock: &impl Clock) -> bool {
        let before = self.assigned_user_ids.len();
        self.assigned_user_ids.retain(|assigned| assigned != user_id);
        if self.assigned_user_ids.len() == before {
            return false;
        }
        self.updated_at = clock.utc().max(self.updated_at);
        true
    }
}
