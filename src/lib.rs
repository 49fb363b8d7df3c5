//! `ProjectFlow`: role-based kanban task management core.
//!
//! This crate provides the authorization policy, task lifecycle state
//! machine and role directory behind the `ProjectFlow` kanban board, team
//! management and chat views. Persistence, authentication and file storage
//! live behind narrow ports so the core stays pure and testable.
//!
//! # Architecture
//!
//! `ProjectFlow` follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`access`]: Role-based authorization decisions
//! - [`directory`]: Users, roles and team membership
//! - [`task`]: Projects, tasks and the kanban column lifecycle
//! - [`chat`]: Direct and team chat messages
//! - [`config`]: Board-wide limits shared by the services

pub mod access;
pub mod chat;
pub mod config;
pub mod directory;
pub mod error;
pub mod task;
