//! Work board aggregate.

use super::BoardId;
use crate::identity::domain::UserId;
use crate::validation::{Description, Title};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A work board owned by exactly one user.
///
/// The owner is fixed at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    title: Title,
    description: Description,
    owner: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardData {
    /// Persisted board identifier.
    pub id: BoardId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description.
    pub description: Description,
    /// Persisted owner.
    pub owner: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Creates a new board owned by `owner`.
    #[must_use]
    pub fn new(owner: UserId, title: Title, description: Description, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: BoardId::new(),
            title,
            description,
            owner,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a board from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            owner: data.owner,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the board description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
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
