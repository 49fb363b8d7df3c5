//! User aggregate.

use super::{DirectoryDomainError, Role, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A person known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    display_name: String,
    email: String,
    role: Role,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted identity-provider uid.
    pub id: UserId,
    /// Persisted display name.
    pub display_name: String,
    /// Persisted email address.
    pub email: String,
    /// Persisted role.
    pub role: Role,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a validated user record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyDisplayName`] when the display
    /// name is blank, or [`DirectoryDomainError::InvalidEmail`] when the
    /// email is not of the form `local@domain`.
    pub fn new(
        id: UserId,
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        clock: &impl Clock,
    ) -> Result<Self, DirectoryDomainError> {
        let raw_name = display_name.into();
        let trimmed_name = raw_name.trim();
        if trimmed_name.is_empty() {
            return Err(DirectoryDomainError::EmptyDisplayName);
        }

        let raw_email = email.into();
        let normalized_email = raw_email.trim().to_ascii_lowercase();
        if !is_plausible_email(&normalized_email) {
            return Err(DirectoryDomainError::InvalidEmail(raw_email));
        }

        let timestamp = clock.utc();
        Ok(Self {
            id,
            display_name: trimmed_name.to_owned(),
            email: normalized_email,
            role,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            display_name: data.display_name,
            email: data.email,
            role: data.role,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the normalized email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the current role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
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

    /// Replaces the role.
    ///
    /// Authorization is the caller's concern; see
    /// [`AccessPolicy::can_change_role`](crate::access::AccessPolicy::can_change_role).
    pub fn change_role(&mut self, role: Role, clock: &impl Clock) {
        self.role = role;
        self.updated_at = clock.utc().max(self.updated_at);
    }
}

fn is_plausible_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    parts.next().is_none()
        && !local.is_empty()
        && !domain.is_empty()
        && !value.chars().any(char::is_whitespace)
}
