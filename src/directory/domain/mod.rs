//! Domain model for users, roles and teams.
//!
//! Users carry exactly one role at a time. Teams hold a duplicate-free set
//! of member identifiers. [`DirectorySnapshot`] is the read model the pure
//! policy and lifecycle code resolves identities against.

mod error;
mod ids;
mod role;
mod snapshot;
mod team;
mod user;

pub use error::{DirectoryDomainError, ParseRoleError};
pub use ids::{TeamId, UserId};
pub use role::Role;
pub use snapshot::DirectorySnapshot;
pub use team::{PersistedTeamData, Team};
pub use user::{PersistedUserData, User};
