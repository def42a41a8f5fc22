//! Relational store adapters.
//!
//! Boards, tasks, and users live in one store so that ownership scoping,
//! cascade deletion, and assignee set-null behave like the relational
//! constraints they model. Each adapter implements every port:
//!
//! - [`memory::InMemoryStore`]: thread-safe in-process store for tests and
//!   single-node development
//! - [`postgres::PostgresStore`]: Diesel-backed `PostgreSQL` store

use crate::board::ports::BoardRepository;
use crate::identity::ports::UserDirectory;
use crate::task::ports::TaskRepository;

pub mod memory;
pub mod postgres;

/// Every persistence port implemented by a single store.
pub trait WorkboardStore: BoardRepository + TaskRepository + UserDirectory {}

impl<T> WorkboardStore for T where T: BoardRepository + TaskRepository + UserDirectory + ?Sized {}
