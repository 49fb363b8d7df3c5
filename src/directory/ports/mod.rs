//! Port contracts for the role directory.
//!
//! Ports define infrastructure-agnostic interfaces used by directory
//! services and by the pure policy and lifecycle code.

pub mod directory;
pub mod identity;
pub mod repository;

pub use directory::RoleDirectory;
pub use identity::{IdentityAdmin, IdentityAdminError, IdentityAdminResult};
pub use repository::{DirectoryRepository, DirectoryRepositoryError, DirectoryRepositoryResult};

#[cfg(test)]
pub use identity::MockIdentityAdmin;
