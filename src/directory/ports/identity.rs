//! Privileged identity-provider operations.

use crate::directory::domain::UserId;
use crate::error::ErrorKind;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity administration.
pub type IdentityAdminResult<T> = Result<T, IdentityAdminError>;

/// Backend-privileged access to authentication accounts.
///
/// Deleting another user's authentication record cannot be done with the
/// acting user's own credentials, so it is delegated to a collaborator that
/// runs with administrative rights.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityAdmin: Send + Sync {
    /// Deletes the authentication account for the user.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityAdminError::AccountNotFound`] when the provider has
    /// no such account, or [`IdentityAdminError::Provider`] when the call
    /// fails.
    async fn delete_account(&self, user_id: &UserId) -> IdentityAdminResult<()>;
}

/// Errors returned by identity administration collaborators.
#[derive(Debug, Clone, Error)]
pub enum IdentityAdminError {
    /// The identity provider has no account for the user.
    #[error("no authentication account for user {0}")]
    AccountNotFound(UserId),

    /// The identity provider call failed.
    #[error("identity provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityAdminError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AccountNotFound(_) => ErrorKind::NotFound,
            Self::Provider(_) => ErrorKind::Persistence,
        }
    }
}
