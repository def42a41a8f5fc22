//! Service layer for scoped task lookup, status updates, and assignment.

use crate::{
    authorization::{AccessDenied, AccessGuard, BoardTask},
    board::ports::{BoardRepository, BoardRepositoryError},
    identity::{
        domain::UserId,
        ports::{UserDirectory, UserDirectoryError},
    },
    task::{
        domain::{Task, TaskId, TaskStatus},
        ports::{TaskRepository, TaskRepositoryError},
    },
    validation::{DetailsUpdate, ValidationError},
};
use mockable::Clock;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for editing a task's title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The task does not exist or its board is not owned by the caller.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The caller may see the task but not modify it.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// The requested assignee does not resolve to an existing user.
    #[error("assignee not found: {0}")]
    AssigneeNotFound(String),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Board repository operation failed.
    #[error(transparent)]
    BoardRepository(#[from] BoardRepositoryError),
    /// User directory operation failed.
    #[error(transparent)]
    UserDirectory(#[from] UserDirectoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<S, C>
where
    S: BoardRepository + TaskRepository + UserDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    guard: AccessGuard,
}

impl<S, C> Clone for TaskService<S, C>
where
    S: BoardRepository + TaskRepository + UserDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            guard: self.guard,
        }
    }
}

impl<S, C> TaskService<S, C>
where
    S: BoardRepository + TaskRepository + UserDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            guard: AccessGuard::new(),
        }
    }

    /// Lists every task on boards owned by `user`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self, user: UserId) -> TaskServiceResult<Vec<Task>> {
        Ok(self.store.list_tasks_for_owner(user).await?)
    }

    /// Fetches a task on one of `user`'s boards.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// or its board belongs to someone else.
    pub async fn get_task(&self, user: UserId, task_id: TaskId) -> TaskServiceResult<Task> {
        self.visible_task(user, task_id, false).await
    }

    /// Sets the status of a task.
    ///
    /// Any status may follow any other, including itself. The raw value must
    /// be one of `ToDo`, `InProgress`, or `Completed`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] or
    /// [`TaskServiceError::Forbidden`] when `user` may not modify the task,
    /// and [`ValidationError::MissingStatus`] or
    /// [`ValidationError::InvalidStatus`] when the value is absent or not
    /// enumerated; the stored status is unchanged in every failure case.
    #[tracing::instrument(skip_all, fields(%user, %task_id))]
    pub async fn update_status(
        &self,
        user: UserId,
        task_id: TaskId,
        status: Option<&str>,
    ) -> TaskServiceResult<Task> {
        let task = self.visible_task(user, task_id, true).await?;
        let target = parse_status(status)?;

        let updated = self
            .store
            .set_task_status(task.id(), target, self.clock.utc())
            .await
            .map_err(not_found_as(task_id))?;
        tracing::info!(from = %task.status(), to = %target, "task status updated");
        Ok(updated)
    }

    /// Assigns a task to an existing user, replacing any previous assignee.
    ///
    /// The assignee needs no access to the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] or
    /// [`TaskServiceError::Forbidden`] when `user` may not modify the task,
    /// [`ValidationError::MissingUserId`] when no identifier is given, and
    /// [`TaskServiceError::AssigneeNotFound`] when it does not resolve to an
    /// existing user; the stored assignee is unchanged in every failure case.
    #[tracing::instrument(skip_all, fields(%user, %task_id))]
    pub async fn assign_user(
        &self,
        user: UserId,
        task_id: TaskId,
        assignee: Option<&str>,
    ) -> TaskServiceResult<Task> {
        let task = self.visible_task(user, task_id, true).await?;
        let raw = assignee
            .filter(|value| !value.trim().is_empty())
            .ok_or(ValidationError::MissingUserId)?;
        let not_found = || TaskServiceError::AssigneeNotFound(raw.to_owned());

        let assignee_id = UserId::from_str(raw).map_err(|_| not_found())?;
        let assignee = self.store.find_user(assignee_id).await?.ok_or_else(not_found)?;

        let updated = self
            .store
            .set_task_assignee(task.id(), assignee.id(), self.clock.utc())
            .await
            .map_err(|err| match err {
                TaskRepositoryError::AssigneeMissing(_) => not_found(),
                other => not_found_as(task_id)(other),
            })?;
        tracing::info!(assignee = %assignee.id(), "task assigned");
        Ok(updated)
    }

    /// Edits the title and/or description of a task.
    ///
    /// An empty request leaves the task untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] or
    /// [`TaskServiceError::Forbidden`] when `user` may not modify the task,
    /// or [`TaskServiceError::Validation`] when the title is invalid.
    #[tracing::instrument(skip_all, fields(%user, %task_id))]
    pub async fn update_task(
        &self,
        user: UserId,
        task_id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let task = self.visible_task(user, task_id, true).await?;
        let update = DetailsUpdate::parse(request.title, request.description)?;
        if update.is_empty() {
            return Ok(task);
        }

        let updated = self
            .store
            .update_task_details(task.id(), &update, self.clock.utc())
            .await
            .map_err(not_found_as(task_id))?;
        tracing::info!("task updated");
        Ok(updated)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] or
    /// [`TaskServiceError::Forbidden`] when `user` may not modify the task.
    #[tracing::instrument(skip_all, fields(%user, %task_id))]
    pub async fn delete_task(&self, user: UserId, task_id: TaskId) -> TaskServiceResult<()> {
        let task = self.visible_task(user, task_id, true).await?;
        self.store
            .delete_task(task.id())
            .await
            .map_err(not_found_as(task_id))?;
        tracing::info!("task deleted");
        Ok(())
    }

    /// Loads a task through its board, hiding tasks on foreign boards.
    ///
    /// With `for_write` set, the ownership guard must also allow writes.
    async fn visible_task(
        &self,
        user: UserId,
        task_id: TaskId,
        for_write: bool,
    ) -> TaskServiceResult<Task> {
        let task = self
            .store
            .find_task(task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;
        let board = self
            .store
            .find_board(task.board_id())
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;

        let scoped = BoardTask::new(&board, &task).ok_or(TaskServiceError::NotFound(task_id))?;
        if !self.guard.is_visible_to(user, &scoped) {
            return Err(TaskServiceError::NotFound(task_id));
        }
        if for_write {
            self.guard.ensure_can_write(user, &scoped)?;
        }
        Ok(task)
    }
}

fn parse_status(raw: Option<&str>) -> Result<TaskStatus, ValidationError> {
    let value = raw
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingStatus)?;
    TaskStatus::try_from(value).map_err(|err| ValidationError::InvalidStatus(err.0))
}

/// Maps a repository-level "not found" into the service's scoped variant.
fn not_found_as(task_id: TaskId) -> impl Fn(TaskRepositoryError) -> TaskServiceError {
    move |err| match err {
        TaskRepositoryError::NotFound(_) => TaskServiceError::NotFound(task_id),
        other => other.into(),
    }
}
