//! Application services for users, roles and teams.

mod roles;
mod snapshot;

pub use roles::{
    RegisterUserRequest, RoleDirectoryError, RoleDirectoryResult, RoleDirectoryService,
};
pub use snapshot::load_snapshot;
