//! Task aggregate.

use super::{TaskId, TaskStatus};
use crate::board::domain::BoardId;
use crate::identity::domain::User;
use crate::validation::{Description, Title};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work on a board.
///
/// The owning board is fixed at creation. Status and assignee changes are
/// applied by the store as field-level updates, so the aggregate itself is
/// read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    board_id: BoardId,
    title: Title,
    description: Description,
    status: TaskStatus,
    assigned_to: Option<User>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning board.
    pub board_id: BoardId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description.
    pub description: Description,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted assignee, resolved to the current user record.
    pub assigned_to: Option<User>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new unassigned task in [`TaskStatus::ToDo`].
    #[must_use]
    pub fn new(board_id: BoardId, title: Title, description: Description, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            board_id,
            title,
            description,
            status: TaskStatus::default(),
            assigned_to: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            board_id: data.board_id,
            title: data.title,
            description: data.description,
            status: data.status,
            assigned_to: data.assigned_to,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning board.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<&User> {
        self.assigned_to.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
