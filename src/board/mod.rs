//! Work board management for Workboard.
//!
//! A board is created by an authenticated user, who becomes its sole
//! owner. Boards group tasks; deleting a board deletes its tasks. Every
//! lookup is scoped to the caller's own boards. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]
//!
//! Adapters live in [`crate::store`] because one relational store backs
//! boards, tasks, and users together.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
