//! Directory port for users mirrored from the identity provider.

use crate::identity::domain::{User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User lookup and synchronization contract.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_user(&self, id: UserId) -> UserDirectoryResult<Option<User>>;

    /// Inserts a user or refreshes the username and email of an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Persistence`] when the store fails.
    async fn upsert_user(&self, user: &User) -> UserDirectoryResult<()>;

    /// Removes a user.
    ///
    /// Boards the user owns are deleted along with their tasks; other tasks
    /// assigned to the user keep existing with no assignee. Removing an
    /// unknown user is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Persistence`] when the store fails.
    async fn remove_user(&self, id: UserId) -> UserDirectoryResult<()>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
