//! Service layer for board creation, scoped lookup, and task attachment.

use crate::{
    authorization::{AccessDenied, AccessGuard},
    board::{
        domain::{Board, BoardId},
        ports::{BoardRepository, BoardRepositoryError},
    },
    identity::domain::UserId,
    task::{
        domain::Task,
        ports::{TaskRepository, TaskRepositoryError},
    },
    validation::{Description, DetailsUpdate, Title, ValidationError},
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBoardRequest {
    title: String,
    description: String,
}

impl CreateBoardRequest {
    /// Creates a request with the required title and an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the board description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for adding a task to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    title: String,
    description: String,
}

impl NewTaskRequest {
    /// Creates a request with the required title and an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for editing a board's title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBoardRequest {
    title: Option<String>,
    description: Option<String>,
}

impl UpdateBoardRequest {
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

/// A board together with its tasks, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDetail {
    /// The board.
    pub board: Board,
    /// Tasks on the board.
    pub tasks: Vec<Task>,
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The board does not exist or is not owned by the caller.
    #[error("board not found: {0}")]
    NotFound(BoardId),
    /// The caller may see the board but not modify it.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// Board repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
pub struct BoardService<S, C>
where
    S: BoardRepository + TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    guard: AccessGuard,
}

impl<S, C> Clone for BoardService<S, C>
where
    S: BoardRepository + TaskRepository + ?Sized,
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

impl<S, C> BoardService<S, C>
where
    S: BoardRepository + TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            guard: AccessGuard::new(),
        }
    }

    /// Lists the boards owned by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the lookup fails.
    pub async fn list_boards(&self, user: UserId) -> BoardServiceResult<Vec<Board>> {
        Ok(self.store.list_boards_for_owner(user).await?)
    }

    /// Lists the boards owned by `user`, each with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] or
    /// [`BoardServiceError::TaskRepository`] when a lookup fails.
    pub async fn list_board_details(&self, user: UserId) -> BoardServiceResult<Vec<BoardDetail>> {
        let boards = self.store.list_boards_for_owner(user).await?;
        let mut by_board: HashMap<BoardId, Vec<Task>> = HashMap::new();
        for task in self.store.list_tasks_for_owner(user).await? {
            by_board.entry(task.board_id()).or_default().push(task);
        }
        Ok(boards
            .into_iter()
            .map(|board| {
                let tasks = by_board.remove(&board.id()).unwrap_or_default();
                BoardDetail { board, tasks }
            })
            .collect())
    }

    /// Creates a board owned by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Validation`] when the title is empty or
    /// too long, or [`BoardServiceError::Repository`] when persistence fails.
    #[tracing::instrument(skip_all, fields(%user))]
    pub async fn create_board(
        &self,
        user: UserId,
        request: CreateBoardRequest,
    ) -> BoardServiceResult<Board> {
        let title = Title::new(request.title)?;
        let board = Board::new(user, title, Description::new(request.description), &*self.clock);
        self.store.store_board(&board).await?;
        tracing::info!(board_id = %board.id(), "board created");
        Ok(board)
    }

    /// Fetches one of `user`'s boards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when the board does not exist
    /// or belongs to someone else; the two cases are indistinguishable.
    pub async fn get_board(&self, user: UserId, board_id: BoardId) -> BoardServiceResult<Board> {
        self.visible_board(user, board_id).await
    }

    /// Fetches one of `user`'s boards together with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] under the same rules as
    /// [`Self::get_board`].
    pub async fn get_board_detail(
        &self,
        user: UserId,
        board_id: BoardId,
    ) -> BoardServiceResult<BoardDetail> {
        let board = self.visible_board(user, board_id).await?;
        let tasks = self.store.list_tasks_for_board(board.id()).await?;
        Ok(BoardDetail { board, tasks })
    }

    /// Adds a new task in `ToDo` status to one of `user`'s boards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when the board is not visible
    /// to `user`, [`BoardServiceError::Forbidden`] when `user` may not write
    /// it, or [`BoardServiceError::Validation`] when the title is invalid.
    #[tracing::instrument(skip_all, fields(%user, %board_id))]
    pub async fn add_task(
        &self,
        user: UserId,
        board_id: BoardId,
        request: NewTaskRequest,
    ) -> BoardServiceResult<Task> {
        let board = self.visible_board(user, board_id).await?;
        self.guard.ensure_can_write(user, &board)?;

        let title = Title::new(request.title)?;
        let task = Task::new(
            board.id(),
            title,
            Description::new(request.description),
            &*self.clock,
        );
        self.store.store_task(&task).await?;
        tracing::info!(task_id = %task.id(), "task added to board");
        Ok(task)
    }

    /// Edits the title and/or description of one of `user`'s boards.
    ///
    /// An empty request leaves the board untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`],
    /// [`BoardServiceError::Forbidden`], or
    /// [`BoardServiceError::Validation`] as for [`Self::add_task`].
    #[tracing::instrument(skip_all, fields(%user, %board_id))]
    pub async fn update_board(
        &self,
        user: UserId,
        board_id: BoardId,
        request: UpdateBoardRequest,
    ) -> BoardServiceResult<Board> {
        let board = self.visible_board(user, board_id).await?;
        self.guard.ensure_can_write(user, &board)?;

        let update = DetailsUpdate::parse(request.title, request.description)?;
        if update.is_empty() {
            return Ok(board);
        }
        let updated = self
            .store
            .update_board_details(board.id(), &update, self.clock.utc())
            .await
            .map_err(|err| match err {
                BoardRepositoryError::NotFound(id) => BoardServiceError::NotFound(id),
                other => other.into(),
            })?;
        tracing::info!("board updated");
        Ok(updated)
    }

    /// Deletes one of `user`'s boards and every task on it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] or
    /// [`BoardServiceError::Forbidden`] as for [`Self::add_task`].
    #[tracing::instrument(skip_all, fields(%user, %board_id))]
    pub async fn delete_board(&self, user: UserId, board_id: BoardId) -> BoardServiceResult<()> {
        let board = self.visible_board(user, board_id).await?;
        self.guard.ensure_can_write(user, &board)?;

        self.store
            .delete_board(board.id())
            .await
            .map_err(|err| match err {
                BoardRepositoryError::NotFound(id) => BoardServiceError::NotFound(id),
                other => other.into(),
            })?;
        tracing::info!("board deleted with its tasks");
        Ok(())
    }

    async fn visible_board(&self, user: UserId, board_id: BoardId) -> BoardServiceResult<Board> {
        self.store
            .find_board(board_id)
            .await?
            .filter(|board| self.guard.is_visible_to(user, board))
            .ok_or(BoardServiceError::NotFound(board_id))
    }
}
