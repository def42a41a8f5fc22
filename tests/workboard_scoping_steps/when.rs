//! When steps for work board scoping scenarios.

use super::world::{WorkboardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use uuid::Uuid;

#[when(r#""{viewer}" fetches the board"#)]
fn viewer_fetches_board(world: &mut WorkboardWorld, viewer: String) -> Result<(), eyre::Report> {
    let viewer_id = world.user(&viewer)?.id();
    let board_id = world.board()?.id();
    let result = run_async(world.boards.get_board(viewer_id, board_id));
    world.last_lookup = Some(result);
    Ok(())
}

#[when(r#""{actor}" sets the task status to "{status}""#)]
fn actor_sets_status(
    world: &mut WorkboardWorld,
    actor: String,
    status: String,
) -> Result<(), eyre::Report> {
    let actor_id = world.user(&actor)?.id();
    let task_id = world.task()?.id();
    let result = run_async(
        world
            .tasks
            .update_status(actor_id, task_id, Some(status.as_str())),
    );
    world.last_update = Some(result);
    Ok(())
}

#[when(r#""{actor}" assigns the task to an unregistered user"#)]
fn actor_assigns_unregistered(
    world: &mut WorkboardWorld,
    actor: String,
) -> Result<(), eyre::Report> {
    let actor_id = world.user(&actor)?.id();
    let task_id = world.task()?.id();
    let stranger = Uuid::new_v4().to_string();
    let result = run_async(
        world
            .tasks
            .assign_user(actor_id, task_id, Some(stranger.as_str())),
    );
    world.last_update = Some(result);
    Ok(())
}

#[when(r#""{actor}" assigns the task to "{assignee}""#)]
fn actor_assigns_user(
    world: &mut WorkboardWorld,
    actor: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let actor_id = world.user(&actor)?.id();
    let assignee_id = world.user(&assignee)?.id().to_string();
    let task_id = world.task()?.id();
    let result = run_async(
        world
            .tasks
            .assign_user(actor_id, task_id, Some(assignee_id.as_str())),
    );
    world.last_update = Some(result);
    Ok(())
}

#[when(r#""{owner}" deletes the board"#)]
fn owner_deletes_board(world: &mut WorkboardWorld, owner: String) -> Result<(), eyre::Report> {
    let owner_id = world.user(&owner)?.id();
    let board_id = world.board()?.id();
    run_async(world.boards.delete_board(owner_id, board_id)).wrap_err("delete board")?;
    Ok(())
}
