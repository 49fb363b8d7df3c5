//! Error types for task domain validation and parsing.

use super::{AttachmentId, Column, ProjectId};
use crate::access::AccessDenied;
use crate::directory::domain::UserId;
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned by task construction and lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task title exceeds the configured limit.
    #[error("task name has {actual} characters, exceeds limit of {max}")]
    TaskNameTooLong {
        /// Configured maximum.
        max: usize,
        /// Actual length.
        actual: usize,
    },

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The task refers to a project that does not resolve.
    #[error("project {0} does not exist")]
    UnresolvedProject(ProjectId),

    /// The comment text is empty after trimming.
    #[error("comment text must not be empty")]
    EmptyComment,

    /// The comment text exceeds the configured limit.
    #[error("comment has {actual} characters, exceeds limit of {max}")]
    CommentTooLong {
        /// Configured maximum.
        max: usize,
        /// Actual length.
        actual: usize,
    },

    /// The file reference has no retrievable location.
    #[error("file reference must have a non-empty url and file name")]
    EmptyFileReference,

    /// The column transition table does not allow the move.
    #[error("task cannot move from {from} to {to}")]
    InvalidColumnTransition {
        /// Current column.
        from: Column,
        /// Requested column.
        to: Column,
    },

    /// The attachment is not present on the task.
    #[error("attachment not found: {0}")]
    AttachmentNotFound(AttachmentId),

    /// A referenced user does not resolve.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    /// The access policy rejected the operation.
    #[error(transparent)]
    PermissionDenied(#[from] AccessDenied),
}

impl TaskDomainError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTaskName
            | Self::TaskNameTooLong { .. }
            | Self::EmptyProjectName
            | Self::UnresolvedProject(_)
            | Self::EmptyComment
            | Self::CommentTooLong { .. }
            | Self::EmptyFileReference
            | Self::InvalidColumnTransition { .. } => ErrorKind::Validation,
            Self::AttachmentNotFound(_) | Self::UnknownUser(_) => ErrorKind::NotFound,
            Self::PermissionDenied(_) => ErrorKind::Permission,
        }
    }
}

/// Error returned while parsing task enums from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTaskValueError {
    /// Unknown column name.
    #[error("unknown column: {0}")]
    Column(String),
    /// Unknown priority name.
    #[error("unknown priority: {0}")]
    Priority(String),
    /// Unknown task field name.
    #[error("unknown task field: {0}")]
    Field(String),
}
