//! Task repository port for the in-memory store.

use super::{InMemoryStore, StoreState, TaskRow};
use crate::{
    board::domain::BoardId,
    identity::domain::UserId,
    task::{
        domain::{Task, TaskId, TaskStatus},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
    validation::DetailsUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Applies `change` to one task row and returns the refreshed task.
fn modify_task(
    state: &mut StoreState,
    id: TaskId,
    updated_at: DateTime<Utc>,
    change: impl FnOnce(&mut TaskRow),
) -> TaskRepositoryResult<Task> {
    let row = state
        .tasks
        .get_mut(&id)
        .ok_or(TaskRepositoryError::NotFound(id))?;
    change(row);
    row.updated_at = updated_at;
    let refreshed = row.clone();
    Ok(state.hydrate(&refreshed))
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn store_task(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write().map_err(TaskRepositoryError::persistence)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        if !state.boards.contains_key(&task.board_id()) {
            return Err(TaskRepositoryError::BoardMissing(task.board_id()));
        }
        let assigned_to = task.assigned_to().map(|user| user.id());
        if let Some(assignee) = assigned_to.filter(|id| !state.users.contains_key(id)) {
            return Err(TaskRepositoryError::AssigneeMissing(assignee));
        }

        let sequence = state.next_sequence();
        state.tasks.insert(
            task.id(),
            TaskRow {
                id: task.id(),
                board_id: task.board_id(),
                title: task.title().clone(),
                description: task.description().clone(),
                status: task.status(),
                assigned_to,
                created_at: task.created_at(),
                updated_at: task.updated_at(),
                sequence,
            },
        );
        Ok(())
    }

    async fn find_task(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read().map_err(TaskRepositoryError::persistence)?;
        Ok(state.tasks.get(&id).map(|row| state.hydrate(row)))
    }

    async fn list_tasks_for_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read().map_err(TaskRepositoryError::persistence)?;
        Ok(state.tasks_where(|row| {
            state
                .boards
                .get(&row.board_id)
                .is_some_and(|board| board.board.owner() == owner)
        }))
    }

    async fn list_tasks_for_board(&self, board_id: BoardId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read().map_err(TaskRepositoryError::persistence)?;
        Ok(state.tasks_where(|row| row.board_id == board_id))
    }

    async fn set_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        let mut state = self.write().map_err(TaskRepositoryError::persistence)?;
        modify_task(&mut state, id, updated_at, |row| row.status = status)
    }

    async fn set_task_assignee(
        &self,
        id: TaskId,
        assignee: UserId,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        let mut state = self.write().map_err(TaskRepositoryError::persistence)?;
        if !state.users.contains_key(&assignee) {
            return Err(TaskRepositoryError::AssigneeMissing(assignee));
        }
        modify_task(&mut state, id, updated_at, |row| {
            row.assigned_to = Some(assignee);
        })
    }

    async fn update_task_details(
        &self,
        id: TaskId,
        update: &DetailsUpdate,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        let mut state = self.write().map_err(TaskRepositoryError::persistence)?;
        modify_task(&mut state, id, updated_at, |row| {
            if let Some(title) = update.title() {
                row.title = title.clone();
            }
            if let Some(description) = update.description() {
                row.description = description.clone();
            }
        })
    }

    async fn delete_task(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write().map_err(TaskRepositoryError::persistence)?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
