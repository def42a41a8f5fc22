//! User directory port for the in-memory store.

use super::{InMemoryStore, StoreState};
use crate::identity::{
    domain::{User, UserId},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};
use async_trait::async_trait;

#[async_trait]
impl UserDirectory for InMemoryStore {
    async fn find_user(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        let state = self.read().map_err(UserDirectoryError::persistence)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn upsert_user(&self, user: &User) -> UserDirectoryResult<()> {
        let mut state = self.write().map_err(UserDirectoryError::persistence)?;
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn remove_user(&self, id: UserId) -> UserDirectoryResult<()> {
        let mut state = self.write().map_err(UserDirectoryError::persistence)?;
        if state.users.remove(&id).is_none() {
            return Ok(());
        }
        // Owned boards cascade, taking their tasks with them.
        state.boards.retain(|_, row| row.board.owner() != id);
        let StoreState { boards, tasks, .. } = &mut *state;
        tasks.retain(|_, row| boards.contains_key(&row.board_id));

        // Remaining assignments are set to null.
        for row in state.tasks.values_mut() {
            if row.assigned_to == Some(id) {
                row.assigned_to = None;
            }
        }
        Ok(())
    }
}
