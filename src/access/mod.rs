//! Role-based access control for `ProjectFlow`.
//!
//! Every permission decision in the crate goes through [`AccessPolicy`].
//! The policy is a single table from ([`Actor`], [`Operation`]) to
//! allow/deny; it is pure, total and performs no I/O, so callers persist
//! changes separately after a successful check.

mod actor;
mod error;
mod operation;
mod policy;

pub use actor::Actor;
pub use error::AccessDenied;
pub use operation::{Operation, OperationKind};
pub use policy::AccessPolicy;
pub(crate) use policy::{authorize, log_denial};

#[cfg(test)]
mod tests;
