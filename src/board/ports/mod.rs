//! Port contracts for work board persistence.

pub mod repository;

pub use repository::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
