//! Repository port for work board persistence and owner-scoped lookup.

use crate::board::domain::{Board, BoardId};
use crate::identity::domain::UserId;
use crate::validation::DetailsUpdate;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Stores a new board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateBoard`] when the board ID
    /// already exists or [`BoardRepositoryError::OwnerMissing`] when the owner
    /// is not in the user directory.
    async fn store_board(&self, board: &Board) -> BoardRepositoryResult<()>;

    /// Finds a board by identifier regardless of owner.
    ///
    /// Returns `None` when the board does not exist.
    async fn find_board(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>>;

    /// Returns the boards owned by `owner` in ascending creation order.
    async fn list_boards_for_owner(&self, owner: UserId) -> BoardRepositoryResult<Vec<Board>>;

    /// Applies a title/description update and stamps `updated_at`.
    ///
    /// Only the fields present in `update` are written; the change is applied
    /// atomically by the store and the refreshed board is returned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the board does not
    /// exist.
    async fn update_board_details(
        &self,
        id: BoardId,
        update: &DetailsUpdate,
        updated_at: DateTime<Utc>,
    ) -> BoardRepositoryResult<Board>;

    /// Deletes a board together with all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the board does not
    /// exist.
    async fn delete_board(&self, id: BoardId) -> BoardRepositoryResult<()>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// A board with the same identifier already exists.
    #[error("duplicate board identifier: {0}")]
    DuplicateBoard(BoardId),

    /// The board owner is not a known user.
    #[error("board owner not found: {0}")]
    OwnerMissing(UserId),

    /// The board was not found.
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
