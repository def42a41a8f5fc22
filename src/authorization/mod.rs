//! Authorization guard for boards and tasks.
//!
//! Boards are owned by exactly one user and tasks inherit ownership from
//! their board. Services consult [`AccessGuard`] before every mutation and
//! use its visibility check to collapse foreign resources into "not found".

mod guard;

pub use guard::{AccessDenied, AccessGuard, BoardTask, OwnedResource};
