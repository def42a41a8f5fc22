//! Board repository port for the `PostgreSQL` store.

use super::{
    PostgresStore,
    models::{BoardDetailsChangeset, BoardRow},
    schema::boards,
};
use crate::{
    board::{
        domain::{Board, BoardId, PersistedBoardData},
        ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
    },
    identity::domain::UserId,
    validation::{Description, DetailsUpdate, Title},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

#[async_trait]
impl BoardRepository for PostgresStore {
    async fn store_board(&self, board: &Board) -> BoardRepositoryResult<()> {
        let board_id = board.id();
        let owner = board.owner();
        let row = to_row(board);

        self.run_blocking(move |connection| {
            diesel::insert_into(boards::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateBoard(board_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        BoardRepositoryError::OwnerMissing(owner)
                    }
                    _ => BoardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_board(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        self.run_blocking(move |connection| {
            let row = boards::table
                .find(id.into_inner())
                .select(BoardRow::as_select())
                .first::<BoardRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_board).transpose()
        })
        .await
    }

    async fn list_boards_for_owner(&self, owner: UserId) -> BoardRepositoryResult<Vec<Board>> {
        self.run_blocking(move |connection| {
            boards::table
                .filter(boards::owner_id.eq(owner.into_inner()))
                .order((boards::created_at.asc(), boards::id.asc()))
                .select(BoardRow::as_select())
                .load::<BoardRow>(connection)
                .map_err(BoardRepositoryError::persistence)?
                .into_iter()
                .map(row_to_board)
                .collect::<BoardRepositoryResult<Vec<_>>>()
        })
        .await
    }

    async fn update_board_details(
        &self,
        id: BoardId,
        update: &DetailsUpdate,
        updated_at: DateTime<Utc>,
    ) -> BoardRepositoryResult<Board> {
        let changes = BoardDetailsChangeset {
            title: update.title().map(|title| title.as_str().to_owned()),
            description: update
                .description()
                .map(|description| description.as_str().to_owned()),
            updated_at,
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(boards::table.find(id.into_inner()))
                .set(&changes)
                .returning(BoardRow::as_returning())
                .get_result::<BoardRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?
                .ok_or(BoardRepositoryError::NotFound(id))?;
            row_to_board(row)
        })
        .await
    }

    async fn delete_board(&self, id: BoardId) -> BoardRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(boards::table.find(id.into_inner()))
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(BoardRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_row(board: &Board) -> BoardRow {
    BoardRow {
        id: board.id().into_inner(),
        title: board.title().as_str().to_owned(),
        description: board.description().as_str().to_owned(),
        owner_id: board.owner().into_inner(),
        created_at: board.created_at(),
        updated_at: board.updated_at(),
    }
}

fn row_to_board(row: BoardRow) -> BoardRepositoryResult<Board> {
    let BoardRow {
        id,
        title,
        description,
        owner_id,
        created_at,
        updated_at,
    } = row;

    let persisted_title = Title::new(title).map_err(BoardRepositoryError::persistence)?;
    Ok(Board::from_persisted(PersistedBoardData {
        id: BoardId::from_uuid(id),
        title: persisted_title,
        description: Description::new(description),
        owner: UserId::from_uuid(owner_id),
        created_at,
        updated_at,
    }))
}
