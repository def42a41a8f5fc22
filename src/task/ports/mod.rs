//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task and board
//! services.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
