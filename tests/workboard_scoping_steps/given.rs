//! Given steps for work board scoping scenarios.

use super::world::{WorkboardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use uuid::Uuid;
use workboard::board::services::{CreateBoardRequest, NewTaskRequest};
use workboard::identity::domain::{User, UserId};
use workboard::identity::ports::UserDirectory;

#[given(r#"a registered user "{name}""#)]
fn registered_user(world: &mut WorkboardWorld, name: String) -> Result<(), eyre::Report> {
    let user = User::new(
        UserId::from_uuid(Uuid::new_v4()),
        name.as_str(),
        format!("{name}@example.com"),
    );
    run_async(world.store.upsert_user(&user)).wrap_err("register scenario user")?;
    world.users.insert(name, user);
    Ok(())
}

#[given(r#""{owner}" creates a board titled "{title}""#)]
fn owner_creates_board(
    world: &mut WorkboardWorld,
    owner: String,
    title: String,
) -> Result<(), eyre::Report> {
    let owner_id = world.user(&owner)?.id();
    let board = run_async(
        world
            .boards
            .create_board(owner_id, CreateBoardRequest::new(title)),
    )
    .wrap_err("create board for scenario")?;
    world.board = Some(board);
    Ok(())
}

#[given(r#""{owner}" adds a task titled "{title}""#)]
fn owner_adds_task(
    world: &mut WorkboardWorld,
    owner: String,
    title: String,
) -> Result<(), eyre::Report> {
    let owner_id = world.user(&owner)?.id();
    let board_id = world.board()?.id();
    let task = run_async(
        world
            .boards
            .add_task(owner_id, board_id, NewTaskRequest::new(title)),
    )
    .wrap_err("add task for scenario")?;
    world.task = Some(task);
    Ok(())
}
