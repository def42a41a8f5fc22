//! Workboard: multi-tenant work board and task tracking.
//!
//! Authenticated users own work boards that group tasks. Owners manage
//! task status and assignment through a REST surface; every read is
//! scoped to the caller's boards and every write passes the
//! authorization guard first.
//!
//! # Architecture
//!
//! Workboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and identity
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Orchestration that scopes, authorizes, and validates
//!
//! # Modules
//!
//! - [`validation`]: Shared title, description, and input validation
//! - [`identity`]: Users, the user directory, and the identity provider seam
//! - [`authorization`]: Ownership checks for boards and tasks
//! - [`board`]: Work board creation, lookup, and task attachment
//! - [`task`]: Task listing, status updates, and assignment
//! - [`store`]: Relational store adapters implementing every port
//! - [`api`]: Thin HTTP layer mapping routes onto services
//! - [`config`]: Environment-driven server configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod authorization;
pub mod board;
pub mod config;
pub mod identity;
pub mod store;
pub mod task;
pub mod telemetry;
pub mod validation;

#[cfg(test)]
mod test_support;
