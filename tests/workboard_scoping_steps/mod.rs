//! Step definitions for work board scoping scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
