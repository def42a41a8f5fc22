//! Identity provider port resolving request credentials to users.

use crate::identity::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity provider operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Resolves an opaque bearer token to the authenticated user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticates a bearer token.
    ///
    /// Returns `None` when the token is not recognised.
    async fn authenticate(&self, token: &str) -> IdentityResult<Option<UserId>>;
}

/// Errors returned by identity provider implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The provider could not be reached or failed internally.
    #[error("identity provider unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a provider failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
