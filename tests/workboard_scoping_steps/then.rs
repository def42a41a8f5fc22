//! Then steps for work board scoping scenarios.

use super::world::{WorkboardWorld, run_async};
use rstest_bdd_macros::then;
use workboard::board::services::BoardServiceError;
use workboard::task::domain::{Task, TaskStatus};
use workboard::task::services::TaskServiceError;

/// Reloads the scenario task as its board owner.
fn reload_task(world: &WorkboardWorld) -> Result<Result<Task, TaskServiceError>, eyre::Report> {
    let owner = world.board()?.owner();
    let task_id = world.task()?.id();
    Ok(run_async(world.tasks.get_task(owner, task_id)))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &WorkboardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = reload_task(world)??;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then("the board lookup fails with not found")]
fn board_lookup_not_found(world: &WorkboardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_lookup
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board lookup result"))?;

    if !matches!(result, Err(BoardServiceError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound, got {result:?}"));
    }
    Ok(())
}

#[then("the last update succeeded")]
fn last_update_succeeded(world: &WorkboardWorld) -> Result<(), eyre::Report> {
    match world.last_update.as_ref() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected success, got {err}")),
        None => Err(eyre::eyre!("missing update result")),
    }
}

#[then(r#"the update is rejected with "{message}""#)]
fn update_rejected_with(world: &WorkboardWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    match result {
        Err(TaskServiceError::Validation(err)) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!(
            "expected validation error {message:?}, got {other:?}"
        )),
    }
}

#[then("the update is rejected because the assignee was not found")]
fn update_rejected_assignee_missing(world: &WorkboardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    if !matches!(result, Err(TaskServiceError::AssigneeNotFound(_))) {
        return Err(eyre::eyre!("expected AssigneeNotFound, got {result:?}"));
    }
    Ok(())
}

#[then("the task is unassigned")]
fn task_is_unassigned(world: &WorkboardWorld) -> Result<(), eyre::Report> {
    let task = reload_task(world)??;
    match task.assigned_to() {
        None => Ok(()),
        Some(user) => Err(eyre::eyre!("expected no assignee, found {}", user.username())),
    }
}

#[then(r#"the task is assigned to "{name}""#)]
fn task_is_assigned_to(world: &WorkboardWorld, name: String) -> Result<(), eyre::Report> {
    let expected = world.user(&name)?;
    let task = reload_task(world)??;

    if task.assigned_to() != Some(expected) {
        return Err(eyre::eyre!(
            "expected assignee {name}, found {:?}",
            task.assigned_to().map(|user| user.username())
        ));
    }
    Ok(())
}

#[then("the task can no longer be found")]
fn task_not_found(world: &WorkboardWorld) -> Result<(), eyre::Report> {
    match reload_task(world)? {
        Err(TaskServiceError::NotFound(_)) => Ok(()),
        other => Err(eyre::eyre!("expected NotFound, got {other:?}")),
    }
}
