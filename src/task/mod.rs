//! Task tracking for Workboard.
//!
//! Tasks belong to exactly one board for their whole lifetime and are
//! visible only to that board's owner. The owner moves tasks freely between
//! the three statuses and assigns them to any existing user. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
