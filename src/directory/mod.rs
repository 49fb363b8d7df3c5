//! Role directory for `ProjectFlow`.
//!
//! Resolves a user identity to its role and team membership so that the
//! access policy and task lifecycle never touch the data store directly.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
