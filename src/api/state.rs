//! Shared handler state.

use crate::api::{ApiError, UserResponse};
use crate::board::services::BoardService;
use crate::identity::domain::UserId;
use crate::identity::ports::{IdentityProvider, UserDirectory};
use crate::store::WorkboardStore;
use crate::task::services::TaskService;
use mockable::DefaultClock;
use std::sync::Arc;

/// Services and identity provider shared by every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn WorkboardStore>,
    boards: BoardService<dyn WorkboardStore, DefaultClock>,
    tasks: TaskService<dyn WorkboardStore, DefaultClock>,
    identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Wires both services onto one store.
    #[must_use]
    pub fn new(store: Arc<dyn WorkboardStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        let clock = Arc::new(DefaultClock);
        Self {
            boards: BoardService::new(Arc::clone(&store), Arc::clone(&clock)),
            tasks: TaskService::new(Arc::clone(&store), clock),
            store,
            identity,
        }
    }

    /// Returns the board service.
    #[must_use]
    pub const fn boards(&self) -> &BoardService<dyn WorkboardStore, DefaultClock> {
        &self.boards
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService<dyn WorkboardStore, DefaultClock> {
        &self.tasks
    }

    /// Returns the identity provider.
    #[must_use]
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    /// Resolves `user` to the body rendered in a board's `owner` field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] when the directory lookup fails or the
    /// user has no directory record.
    pub async fn user_response(&self, user: UserId) -> Result<UserResponse, ApiError> {
        self.store
            .find_user(user)
            .await?
            .as_ref()
            .map(UserResponse::from)
            .ok_or_else(|| ApiError::Internal(format!("user {user} missing from directory")))
    }
}
