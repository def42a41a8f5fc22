//! In-memory relational store.

mod board;
mod task;
mod user;

use crate::board::domain::{Board, BoardId};
use crate::identity::domain::{User, UserId};
use crate::task::domain::{PersistedTaskData, Task, TaskId, TaskStatus};
use crate::validation::{Description, Title};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory store implementing the board, task, and user ports.
///
/// Every operation runs inside a single lock acquisition, so field-level
/// updates are atomic with respect to each other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    boards: HashMap<BoardId, BoardRow>,
    tasks: HashMap<TaskId, TaskRow>,
    next_sequence: u64,
}

#[derive(Debug, Clone)]
struct BoardRow {
    board: Board,
    sequence: u64,
}

/// Task columns as stored; the assignee is a foreign key resolved on read.
#[derive(Debug, Clone)]
struct TaskRow {
    id: TaskId,
    board_id: BoardId,
    title: Title,
    description: Description,
    status: TaskStatus,
    assigned_to: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    sequence: u64,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, std::io::Error> {
        self.state
            .read()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, std::io::Error> {
        self.state
            .write()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }
}

impl StoreState {
    const fn next_sequence(&mut self) -> u64 {
        self.next_sequence += 1;
        self.next_sequence
    }

    fn hydrate(&self, row: &TaskRow) -> Task {
        Task::from_persisted(PersistedTaskData {
            id: row.id,
            board_id: row.board_id,
            title: row.title.clone(),
            description: row.description.clone(),
            status: row.status,
            assigned_to: row.assigned_to.and_then(|id| self.users.get(&id).cloned()),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    /// Returns hydrated tasks matching `predicate`, oldest first.
    fn tasks_where(&self, predicate: impl Fn(&TaskRow) -> bool) -> Vec<Task> {
        let mut rows: Vec<&TaskRow> = self.tasks.values().filter(|row| predicate(row)).collect();
        rows.sort_by_key(|row| (row.created_at, row.sequence));
        rows.into_iter().map(|row| self.hydrate(row)).collect()
    }
}
