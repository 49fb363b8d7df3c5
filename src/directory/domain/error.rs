//! Error types for directory domain validation and parsing.

use super::{TeamId, UserId};
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned while constructing or resolving directory values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The user identifier is empty after trimming.
    #[error("user id must not be empty")]
    EmptyUserId,

    /// The display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The team name is empty after trimming.
    #[error("team name must not be empty")]
    EmptyTeamName,

    /// The user is already a member of the team.
    #[error("user {user_id} is already a member of team {team_id}")]
    DuplicateMember {
        /// Team that already contains the user.
        team_id: TeamId,
        /// The duplicate member.
        user_id: UserId,
    },

    /// The user is not a member of the team.
    #[error("user {user_id} is not a member of team {team_id}")]
    MemberNotFound {
        /// Team that was searched.
        team_id: TeamId,
        /// The missing member.
        user_id: UserId,
    },

    /// The user identifier does not resolve to a known user.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    /// The team identifier does not resolve to a known team.
    #[error("unknown team: {0}")]
    UnknownTeam(TeamId),
}

impl DirectoryDomainError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyUserId
            | Self::EmptyDisplayName
            | Self::InvalidEmail(_)
            | Self::EmptyTeamName
            | Self::DuplicateMember { .. } => ErrorKind::Validation,
            Self::MemberNotFound { .. } | Self::UnknownUser(_) | Self::UnknownTeam(_) => {
                ErrorKind::NotFound
            }
        }
    }
}

/// Error returned while parsing roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct ParseRoleError(pub String);
