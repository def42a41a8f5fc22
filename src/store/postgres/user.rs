//! User directory port for the `PostgreSQL` store.

use super::{PostgresStore, models::UserRow, schema::users};
use crate::identity::{
    domain::{User, UserId},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;

#[async_trait]
impl UserDirectory for PostgresStore {
    async fn find_user(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .find(id.into_inner())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserDirectoryError::persistence)?;
            Ok(row.map(row_to_user))
        })
        .await
    }

    async fn upsert_user(&self, user: &User) -> UserDirectoryResult<()> {
        let row = UserRow {
            id: user.id().into_inner(),
            username: user.username().to_owned(),
            email: user.email().to_owned(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&row)
                .on_conflict(users::id)
                .do_update()
                .set((
                    users::username.eq(excluded(users::username)),
                    users::email.eq(excluded(users::email)),
                ))
                .execute(connection)
                .map_err(UserDirectoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn remove_user(&self, id: UserId) -> UserDirectoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(users::table.find(id.into_inner()))
                .execute(connection)
                .map_err(UserDirectoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

pub(super) fn row_to_user(row: UserRow) -> User {
    User::new(UserId::from_uuid(row.id), row.username, row.email)
}
