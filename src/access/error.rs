//! Permission failure.

use super::OperationKind;
use crate::directory::domain::{Role, UserId};
use crate::error::ErrorKind;
use thiserror::Error;

/// The access policy rejected an operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("user {user_id} with role {role} may not {operation}")]
pub struct AccessDenied {
    /// The acting user.
    pub user_id: UserId,
    /// The role the decision was made with.
    pub role: Role,
    /// The rejected operation.
    pub operation: OperationKind,
}

impl AccessDenied {
    /// Returns the error category, always [`ErrorKind::Permission`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Permission
    }
}
