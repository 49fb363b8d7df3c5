//! Projects, tasks and the kanban lifecycle for `ProjectFlow`.
//!
//! Tasks move between the `todo`, `ongoing`, `done` and `blocked` columns
//! under the role-based rules in [`crate::access`]. Field edits are
//! reserved for managers and owners; employees move the tasks assigned to
//! them and append comments and attachments. The module follows hexagonal
//! architecture:
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
