//! Identity provider adapters.

pub mod static_tokens;

pub use static_tokens::{Credential, StaticTokenIdentityProvider};
