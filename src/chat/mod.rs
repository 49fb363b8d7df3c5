//! Direct and team chat for `ProjectFlow`.
//!
//! A direct conversation belongs to an unordered pair of users; a team
//! conversation belongs to a team. Only participants post, and managers
//! and owners may additionally read every team conversation.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
