//! Task repository port for the `PostgreSQL` store.

use super::{
    PostgresStore,
    models::{TaskDetailsChangeset, TaskRow, UserRow},
    schema::{boards, tasks, users},
    user::row_to_user,
};
use crate::{
    board::domain::BoardId,
    identity::domain::{User, UserId},
    task::{
        domain::{PersistedTaskData, Task, TaskId, TaskStatus},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
    validation::{Description, DetailsUpdate, Title},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;

#[async_trait]
impl TaskRepository for PostgresStore {
    async fn store_task(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let board_id = task.board_id();
        let assignee = task.assigned_to().map(User::id);
        let row = to_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info) => {
                        match (is_assignee_violation(info.as_ref()), assignee) {
                            (true, Some(user)) => TaskRepositoryError::AssigneeMissing(user),
                            _ => TaskRepositoryError::BoardMissing(board_id),
                        }
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_task(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(|found| hydrate_one(connection, found)).transpose()
        })
        .await
    }

    async fn list_tasks_for_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .inner_join(boards::table)
                .filter(boards::owner_id.eq(owner.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            hydrate_all(connection, rows)
        })
        .await
    }

    async fn list_tasks_for_board(&self, board_id: BoardId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::board_id.eq(board_id.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            hydrate_all(connection, rows)
        })
        .await
    }

    async fn set_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(id.into_inner()))
                .set((
                    tasks::status.eq(status.as_str()),
                    tasks::updated_at.eq(updated_at),
                ))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            hydrate_one(connection, row)
        })
        .await
    }

    async fn set_task_assignee(
        &self,
        id: TaskId,
        assignee: UserId,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(id.into_inner()))
                .set((
                    tasks::assigned_to.eq(Some(assignee.into_inner())),
                    tasks::updated_at.eq(updated_at),
                ))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        TaskRepositoryError::AssigneeMissing(assignee)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            hydrate_one(connection, row)
        })
        .await
    }

    async fn update_task_details(
        &self,
        id: TaskId,
        update: &DetailsUpdate,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        let changes = TaskDetailsChangeset {
            title: update.title().map(|title| title.as_str().to_owned()),
            description: update
                .description()
                .map(|description| description.as_str().to_owned()),
            updated_at,
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(id.into_inner()))
                .set(&changes)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            hydrate_one(connection, row)
        })
        .await
    }

    async fn delete_task(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id().into_inner(),
        board_id: task.board_id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        assigned_to: task.assigned_to().map(|user| user.id().into_inner()),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn is_assignee_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "tasks_assigned_to_fkey")
}

/// Loads the users referenced by `rows` in one query.
fn load_assignees(
    connection: &mut PgConnection,
    rows: &[TaskRow],
) -> TaskRepositoryResult<HashMap<uuid::Uuid, User>> {
    let ids: Vec<uuid::Uuid> = rows.iter().filter_map(|row| row.assigned_to).collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let users = users::table
        .filter(users::id.eq_any(ids))
        .select(UserRow::as_select())
        .load::<UserRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;
    Ok(users
        .into_iter()
        .map(|row| (row.id, row_to_user(row)))
        .collect())
}

fn hydrate_one(connection: &mut PgConnection, row: TaskRow) -> TaskRepositoryResult<Task> {
    let assignees = load_assignees(connection, std::slice::from_ref(&row))?;
    row_to_task(row, &assignees)
}

fn hydrate_all(
    connection: &mut PgConnection,
    rows: Vec<TaskRow>,
) -> TaskRepositoryResult<Vec<Task>> {
    let assignees = load_assignees(connection, &rows)?;
    rows.into_iter()
        .map(|row| row_to_task(row, &assignees))
        .collect()
}

fn row_to_task(row: TaskRow, assignees: &HashMap<uuid::Uuid, User>) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        board_id,
        title,
        description,
        status: persisted_status,
        assigned_to,
        created_at,
        updated_at,
    } = row;

    let persisted_title = Title::new(title).map_err(TaskRepositoryError::persistence)?;
    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        board_id: BoardId::from_uuid(board_id),
        title: persisted_title,
        description: Description::new(description),
        status,
        assigned_to: assigned_to.and_then(|user_id| assignees.get(&user_id).cloned()),
        created_at,
        updated_at,
    }))
}
