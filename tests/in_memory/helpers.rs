//! Shared fixtures for in-memory store integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use uuid::Uuid;
use workboard::board::domain::Board;
use workboard::board::services::{BoardService, CreateBoardRequest, NewTaskRequest};
use workboard::identity::domain::{User, UserId};
use workboard::identity::ports::UserDirectory;
use workboard::store::memory::InMemoryStore;
use workboard::task::domain::Task;
use workboard::task::services::TaskService;

/// Board service over the in-memory store.
pub type Boards = BoardService<InMemoryStore, DefaultClock>;

/// Task service over the in-memory store.
pub type Tasks = TaskService<InMemoryStore, DefaultClock>;

/// Both services sharing one store.
pub struct Services {
    pub store: Arc<InMemoryStore>,
    pub boards: Boards,
    pub tasks: Tasks,
}

/// Provides services over a fresh store.
#[fixture]
pub fn services() -> Services {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(DefaultClock);
    Services {
        boards: BoardService::new(Arc::clone(&store), Arc::clone(&clock)),
        tasks: TaskService::new(Arc::clone(&store), clock),
        store,
    }
}

/// Builds a user with a random identifier.
#[must_use]
pub fn make_user(username: &str) -> User {
    User::new(
        UserId::from_uuid(Uuid::new_v4()),
        username,
        format!("{username}@example.com"),
    )
}

impl Services {
    /// Registers a user in the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory rejects the user.
    pub async fn register(&self, username: &str) -> Result<User, eyre::Report> {
        let user = make_user(username);
        self.store.upsert_user(&user).await?;
        Ok(user)
    }

    /// Creates a board for `owner` with a single task.
    ///
    /// # Errors
    ///
    /// Returns an error if either creation fails.
    pub async fn board_with_task(
        &self,
        owner: &User,
        board_title: &str,
        task_title: &str,
    ) -> Result<(Board, Task), eyre::Report> {
        let board = self
            .boards
            .create_board(owner.id(), CreateBoardRequest::new(board_title))
            .await?;
        let task = self
            .boards
            .add_task(owner.id(), board.id(), NewTaskRequest::new(task_title))
            .await?;
        Ok((board, task))
    }
}
