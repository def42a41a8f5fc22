//! `PostgreSQL` adapter for Workboard persistence.
//!
//! Referential actions do the relational work: deleting a board cascades to
//! its tasks and deleting a user nulls out their task assignments. Every
//! mutation is a single statement, so concurrent field updates on the same
//! task never clobber one another.

mod board;
mod models;
mod schema;
mod task;
mod user;

use crate::board::ports::BoardRepositoryError;
use crate::identity::ports::UserDirectoryError;
use crate::task::ports::TaskRepositoryError;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};

/// `PostgreSQL` connection pool type used by the store.
pub type WorkboardPgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the Workboard schema; safe to apply repeatedly.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../../migrations/2026-10-01-000000_create_workboard_tables/up.sql");

/// `PostgreSQL`-backed store implementing the board, task, and user ports.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: WorkboardPgPool,
}

impl PostgresStore {
    /// Creates a store from a connection pool.
    #[must_use]
    pub const fn new(pool: WorkboardPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool for `database_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] when the initial connections cannot be made.
    pub fn connect(database_url: &str, max_size: u32) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder().max_size(max_size).build(manager)?;
        Ok(Self::new(pool))
    }

    /// Applies [`CREATE_SCHEMA_SQL`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the schema cannot be
    /// applied.
    pub async fn apply_schema(&self) -> Result<(), BoardRepositoryError> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_SCHEMA_SQL)
                .map_err(BoardRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: FromPersistence + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(E::from_persistence)?;
            f(&mut *connection)
        })
        .await
        .map_err(E::from_persistence)?
    }
}

/// Port error types that can wrap an infrastructure failure.
trait FromPersistence: Sized {
    fn from_persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self;
}

impl FromPersistence for BoardRepositoryError {
    fn from_persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

impl FromPersistence for TaskRepositoryError {
    fn from_persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

impl FromPersistence for UserDirectoryError {
    fn from_persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}
