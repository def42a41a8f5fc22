//! Repository port for task persistence, scoped listing, and field updates.

use crate::board::domain::BoardId;
use crate::identity::domain::UserId;
use crate::task::domain::{Task, TaskId, TaskStatus};
use crate::validation::DetailsUpdate;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Mutations are field-level: each one writes only the columns it names
/// plus `updated_at`, as a single atomic store operation, and returns the
/// refreshed task. Concurrent status and assignee changes to the same task
/// therefore never overwrite one another.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists or [`TaskRepositoryError::BoardMissing`] when its
    /// board does not exist.
    async fn store_task(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier regardless of board owner.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks on boards owned by `owner`, oldest first.
    async fn list_tasks_for_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks on one board, oldest first.
    async fn list_tasks_for_board(&self, board_id: BoardId) -> TaskRepositoryResult<Vec<Task>>;

    /// Sets the task status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn set_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task>;

    /// Sets the task assignee, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// or [`TaskRepositoryError::AssigneeMissing`] when the user vanished
    /// before the write.
    async fn set_task_assignee(
        &self,
        id: TaskId,
        assignee: UserId,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task>;

    /// Applies a title/description update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update_task_details(
        &self,
        id: TaskId,
        update: &DetailsUpdate,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete_task(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task's board does not exist.
    #[error("board not found for task: {0}")]
    BoardMissing(BoardId),

    /// The assignee does not exist.
    #[error("assignee not found: {0}")]
    AssigneeMissing(UserId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
