//! User identity for Workboard.
//!
//! Authentication and credential storage belong to an external identity
//! provider. This module models what the rest of the crate needs from it:
//! an opaque authenticated [`domain::UserId`] per request and a directory
//! of known users used to resolve task assignees.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
