//! Snapshot loading shared by every service that checks permissions.

use crate::directory::{
    domain::DirectorySnapshot,
    ports::{DirectoryRepository, DirectoryRepositoryResult},
};

/// Loads a fresh [`DirectorySnapshot`] from the repository.
///
/// Called once per service operation; snapshots are never reused across
/// calls, so the acting user's role is always read from the store.
///
/// # Errors
///
/// Returns the repository error when users or teams cannot be listed.
pub async fn load_snapshot<D>(directory: &D) -> DirectoryRepositoryResult<DirectorySnapshot>
where
    D: DirectoryRepository + ?Sized,
{
    let users = directory.list_users().await?;
    let teams = directory.list_teams().await?;
    Ok(DirectorySnapshot::new(users, teams))
}
