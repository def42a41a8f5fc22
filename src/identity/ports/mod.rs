//! Port contracts for user lookup and request authentication.

pub mod directory;
pub mod provider;

pub use directory::{UserDirectory, UserDirectoryError, UserDirectoryResult};
pub use provider::{IdentityError, IdentityProvider, IdentityResult};
