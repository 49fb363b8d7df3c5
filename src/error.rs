//! Crate-wide error classification.
//!
//! Each bounded context defines its own `thiserror` enum; [`ErrorKind`]
//! lets callers branch on the category without matching every variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or empty input.
    Validation,
    /// The access policy rejected the operation.
    Permission,
    /// A referenced user, team, project, task or attachment does not resolve.
    NotFound,
    /// An external collaborator (store, file storage, identity) failed.
    Persistence,
}

impl ErrorKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Permission => "permission",
            Self::NotFound => "not_found",
            Self::Persistence => "persistence",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
