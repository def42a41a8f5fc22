//! Board repository port for the in-memory store.

use super::{BoardRow, InMemoryStore};
use crate::{
    board::{
        domain::{Board, BoardId, PersistedBoardData},
        ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
    },
    identity::domain::UserId,
    validation::DetailsUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl BoardRepository for InMemoryStore {
    async fn store_board(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut state = self.write().map_err(BoardRepositoryError::persistence)?;
        if state.boards.contains_key(&board.id()) {
            return Err(BoardRepositoryError::DuplicateBoard(board.id()));
        }
        if !state.users.contains_key(&board.owner()) {
            return Err(BoardRepositoryError::OwnerMissing(board.owner()));
        }
        let sequence = state.next_sequence();
        state.boards.insert(
            board.id(),
            BoardRow {
                board: board.clone(),
                sequence,
            },
        );
        Ok(())
    }

    async fn find_board(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        let state = self.read().map_err(BoardRepositoryError::persistence)?;
        Ok(state.boards.get(&id).map(|row| row.board.clone()))
    }

    async fn list_boards_for_owner(&self, owner: UserId) -> BoardRepositoryResult<Vec<Board>> {
        let state = self.read().map_err(BoardRepositoryError::persistence)?;
        let mut rows: Vec<&BoardRow> = state
            .boards
            .values()
            .filter(|row| row.board.owner() == owner)
            .collect();
        rows.sort_by_key(|row| (row.board.created_at(), row.sequence));
        Ok(rows.into_iter().map(|row| row.board.clone()).collect())
    }

    async fn update_board_details(
        &self,
        id: BoardId,
        update: &DetailsUpdate,
        updated_at: DateTime<Utc>,
    ) -> BoardRepositoryResult<Board> {
        let mut state = self.write().map_err(BoardRepositoryError::persistence)?;
        let row = state
            .boards
            .get_mut(&id)
            .ok_or(BoardRepositoryError::NotFound(id))?;

        let current = &row.board;
        row.board = Board::from_persisted(PersistedBoardData {
            id: current.id(),
            title: update
                .title()
                .cloned()
                .unwrap_or_else(|| current.title().clone()),
            description: update
                .description()
                .cloned()
                .unwrap_or_else(|| current.description().clone()),
            owner: current.owner(),
            created_at: current.created_at(),
            updated_at,
        });
        Ok(row.board.clone())
    }

    async fn delete_board(&self, id: BoardId) -> BoardRepositoryResult<()> {
        let mut state = self.write().map_err(BoardRepositoryError::persistence)?;
        if state.boards.remove(&id).is_none() {
            return Err(BoardRepositoryError::NotFound(id));
        }
        // Cascade to the board's tasks.
        state.tasks.retain(|_, row| row.board_id != id);
        Ok(())
    }
}
