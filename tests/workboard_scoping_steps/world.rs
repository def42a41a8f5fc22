//! Shared world state for work board scoping BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use workboard::board::domain::Board;
use workboard::board::services::{BoardService, BoardServiceError};
use workboard::identity::domain::User;
use workboard::store::memory::InMemoryStore;
use workboard::task::domain::Task;
use workboard::task::services::{TaskService, TaskServiceError};

/// Scenario world for work board behaviour tests.
pub struct WorkboardWorld {
    pub store: Arc<InMemoryStore>,
    pub boards: BoardService<InMemoryStore, DefaultClock>,
    pub tasks: TaskService<InMemoryStore, DefaultClock>,
    pub users: HashMap<String, User>,
    pub board: Option<Board>,
    pub task: Option<Task>,
    pub last_lookup: Option<Result<Board, BoardServiceError>>,
    pub last_update: Option<Result<Task, TaskServiceError>>,
}

impl WorkboardWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let clock = Arc::new(DefaultClock);
        Self {
            boards: BoardService::new(Arc::clone(&store), Arc::clone(&clock)),
            tasks: TaskService::new(Arc::clone(&store), clock),
            store,
            users: HashMap::new(),
            board: None,
            task: None,
            last_lookup: None,
            last_update: None,
        }
    }

    /// Returns a registered user by name.
    ///
    /// # Errors
    ///
    /// Returns an error when no user was registered under `name`.
    pub fn user(&self, name: &str) -> Result<&User, eyre::Report> {
        self.users
            .get(name)
            .ok_or_else(|| eyre::eyre!("user {name} is not registered in this scenario"))
    }

    /// Returns the board created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no board has been created yet.
    pub fn board(&self) -> Result<&Board, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Returns the task created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for WorkboardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> WorkboardWorld {
    WorkboardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
