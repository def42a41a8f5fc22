//! Route tables grouped by resource.

pub(super) mod boards;
pub(super) mod health;
pub(super) mod tasks;
