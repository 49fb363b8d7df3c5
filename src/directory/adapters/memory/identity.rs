//! In-memory identity administration for tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::UserId,
    ports::{IdentityAdmin, IdentityAdminError, IdentityAdminResult},
};

/// Records account deletions instead of calling a real identity provider.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityAdmin {
    deleted: Arc<RwLock<HashSet<UserId>>>,
}

impl InMemoryIdentityAdmin {
    /// Creates an admin with no recorded deletions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the account has been deleted.
    #[must_use]
    pub fn is_deleted(&self, user_id: &UserId) -> bool {
        self.deleted
            .read()
            .map(|deleted| deleted.contains(user_id))
            .unwrap_or(false)
    }
}

#[async_trait]
impl IdentityAdmin for InMemoryIdentityAdmin {
    async fn delete_account(&self, user_id: &UserId) -> IdentityAdminResult<()> {
        let mut deleted = self
            .deleted
            .write()
            .map_err(|err| IdentityAdminError::provider(std::io::Error::other(err.to_string())))?;
        if !deleted.insert(user_id.clone()) {
            return Err(IdentityAdminError::AccountNotFound(user_id.clone()));
        }
        Ok(())
    }
}
