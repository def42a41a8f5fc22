//! Shared helpers for `PostgreSQL` integration tests.

use mockable::DefaultClock;
use uuid::Uuid;
use workboard::board::domain::Board;
use workboard::identity::domain::{User, UserId};
use workboard::identity::ports::UserDirectory;
use workboard::store::postgres::PostgresStore;
use workboard::task::domain::Task;
use workboard::validation::{Description, Title};

/// Environment variable naming the test database.
pub const DATABASE_URL_ENV: &str = "WORKBOARD_TEST_DATABASE_URL";

/// Connects to the test database and applies the schema.
///
/// Returns `None` when no test database is configured.
///
/// # Errors
///
/// Returns an error if the pool cannot be built or the schema fails to apply.
pub async fn connect() -> Result<Option<PostgresStore>, eyre::Report> {
    let Some(url) = std::env::var(DATABASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
    else {
        return Ok(None);
    };

    let store = tokio::task::spawn_blocking(move || PostgresStore::connect(&url, 2)).await??;
    store.apply_schema().await?;
    Ok(Some(store))
}

/// Inserts a user with a fresh identifier.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn register(store: &PostgresStore, username: &str) -> Result<User, eyre::Report> {
    let user = User::new(
        UserId::from_uuid(Uuid::new_v4()),
        username,
        format!("{username}@example.com"),
    );
    store.upsert_user(&user).await?;
    Ok(user)
}

/// Builds an unsaved board.
///
/// # Errors
///
/// Returns an error if the title is invalid.
pub fn board_for(owner: &User, title: &str) -> Result<Board, eyre::Report> {
    Ok(Board::new(
        owner.id(),
        Title::new(title)?,
        Description::default(),
        &DefaultClock,
    ))
}

/// Builds an unsaved task on `board`.
///
/// # Errors
///
/// Returns an error if the title is invalid.
pub fn task_for(board: &Board, title: &str) -> Result<Task, eyre::Report> {
    Ok(Task::new(
        board.id(),
        Title::new(title)?,
        Description::default(),
        &DefaultClock,
    ))
}
