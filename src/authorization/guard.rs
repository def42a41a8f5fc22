//! Ownership-based access decisions.

use crate::board::domain::Board;
use crate::identity::domain::UserId;
use crate::task::domain::Task;
use thiserror::Error;

/// A resource whose write access is decided by a single owning user.
pub trait OwnedResource {
    /// Returns the user allowed to modify the resource.
    fn owner(&self) -> UserId;
}

impl OwnedResource for Board {
    fn owner(&self) -> UserId {
        Self::owner(self)
    }
}

/// A task viewed through the board it belongs to.
///
/// Tasks carry no owner of their own; the board's owner decides.
#[derive(Debug, Clone, Copy)]
pub struct BoardTask<'a> {
    /// Board the task belongs to.
    pub board: &'a Board,
    /// The task itself.
    pub task: &'a Task,
}

impl<'a> BoardTask<'a> {
    /// Pairs a task with its board.
    ///
    /// Returns `None` when the task does not belong to the given board.
    #[must_use]
    pub fn new(board: &'a Board, task: &'a Task) -> Option<Self> {
        (task.board_id() == board.id()).then_some(Self { board, task })
    }
}

impl OwnedResource for BoardTask<'_> {
    fn owner(&self) -> UserId {
        self.board.owner()
    }
}

/// Error returned when a user attempts to modify a resource they do not own.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("user {user} may not modify a resource owned by {owner}")]
pub struct AccessDenied {
    /// User who attempted the write.
    pub user: UserId,
    /// Owner of the resource.
    pub owner: UserId,
}

/// Stateless ownership guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGuard;

impl AccessGuard {
    /// Creates a guard.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns whether `user` may read `resource`.
    ///
    /// Reads are open to any authenticated caller; listing and lookup
    /// queries are scoped to the caller's own boards separately through
    /// [`Self::is_visible_to`].
    #[must_use]
    pub const fn can_read<R: OwnedResource + ?Sized>(self, _user: UserId, _resource: &R) -> bool {
        true
    }

    /// Returns whether `user` may modify `resource`.
    #[must_use]
    pub fn can_write<R: OwnedResource + ?Sized>(self, user: UserId, resource: &R) -> bool {
        resource.owner() == user
    }

    /// Returns whether lookups made by `user` may surface `resource`.
    ///
    /// Resources that fail this check must be reported as absent so their
    /// existence does not leak across tenants.
    #[must_use]
    pub fn is_visible_to<R: OwnedResource + ?Sized>(self, user: UserId, resource: &R) -> bool {
        resource.owner() == user
    }

    /// Ensures `user` may modify `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when `user` is not the owner.
    pub fn ensure_can_write<R: OwnedResource + ?Sized>(
        self,
        user: UserId,
        resource: &R,
    ) -> Result<(), AccessDenied> {
        if self.can_write(user, resource) {
            return Ok(());
        }
        tracing::warn!(%user, owner = %resource.owner(), "write denied by ownership guard");
        Err(AccessDenied {
            user,
            owner: resource.owner(),
        })
    }
}
