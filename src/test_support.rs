//! Test doubles shared by the board and task unit tests.

use crate::board::domain::{Board, BoardId};
use crate::board::ports::{BoardRepository, BoardRepositoryResult};
use crate::identity::domain::{User, UserId};
use crate::identity::ports::{UserDirectory, UserDirectoryResult};
use crate::task::domain::{Task, TaskId, TaskStatus};
use crate::task::ports::{TaskRepository, TaskRepositoryResult};
use crate::validation::DetailsUpdate;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

mock! {
    pub Store {}

    #[async_trait]
    impl BoardRepository for Store {
        async fn store_board(&self, board: &Board) -> BoardRepositoryResult<()>;
        async fn find_board(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>>;
        async fn list_boards_for_owner(&self, owner: UserId) -> BoardRepositoryResult<Vec<Board>>;
        async fn update_board_details(
            &self,
            id: BoardId,
            update: &DetailsUpdate,
            updated_at: DateTime<Utc>,
        ) -> BoardRepositoryResult<Board>;
        async fn delete_board(&self, id: BoardId) -> BoardRepositoryResult<()>;
    }

    #[async_trait]
    impl TaskRepository for Store {
        async fn store_task(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn find_task(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn list_tasks_for_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>>;
        async fn list_tasks_for_board(&self, board_id: BoardId) -> TaskRepositoryResult<Vec<Task>>;
        async fn set_task_status(
            &self,
            id: TaskId,
            status: TaskStatus,
            updated_at: DateTime<Utc>,
        ) -> TaskRepositoryResult<Task>;
        async fn set_task_assignee(
            &self,
            id: TaskId,
            assignee: UserId,
            updated_at: DateTime<Utc>,
        ) -> TaskRepositoryResult<Task>;
        async fn update_task_details(
            &self,
            id: TaskId,
            update: &DetailsUpdate,
            updated_at: DateTime<Utc>,
        ) -> TaskRepositoryResult<Task>;
        async fn delete_task(&self, id: TaskId) -> TaskRepositoryResult<()>;
    }

    #[async_trait]
    impl UserDirectory for Store {
        async fn find_user(&self, id: UserId) -> UserDirectoryResult<Option<User>>;
        async fn upsert_user(&self, user: &User) -> UserDirectoryResult<()>;
        async fn remove_user(&self, id: UserId) -> UserDirectoryResult<()>;
    }
}

/// Builds a user with a fresh identifier.
pub(crate) fn user(username: &str) -> User {
    User::new(UserId::new(), username, format!("{username}@example.com"))
}

/// Stand-in backend failure.
pub(crate) fn backend_down() -> std::io::Error {
    std::io::Error::other("backend unavailable")
}
