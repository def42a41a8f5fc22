//! Task persistence against `PostgreSQL`.

use super::helpers::{board_for, connect, register, task_for};
use rstest::rstest;
use workboard::board::ports::BoardRepository;
use workboard::identity::domain::UserId;
use workboard::identity::ports::UserDirectory;
use workboard::task::domain::{TaskId, TaskStatus};
use workboard::task::ports::{TaskRepository, TaskRepositoryError};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_and_assignee_updates_are_independent() -> Result<(), eyre::Report> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    let alice = register(&store, "alice").await?;
    let bob = register(&store, "bob").await?;
    let board = board_for(&alice, "Alpha")?;
    store.store_board(&board).await?;
    let task = task_for(&board, "a1")?;
    store.store_task(&task).await?;

    let now = chrono::Utc::now();
    let (status, assignee) = tokio::join!(
        store.set_task_status(task.id(), TaskStatus::Completed, now),
        store.set_task_assignee(task.id(), bob.id(), now),
    );
    status?;
    assignee?;

    let current = store
        .find_task(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    assert_eq!(current.status(), TaskStatus::Completed);
    assert_eq!(current.assigned_to(), Some(&bob));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_assignee_is_reported() -> Result<(), eyre::Report> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    let alice = register(&store, "alice").await?;
    let board = board_for(&alice, "Alpha")?;
    store.store_board(&board).await?;
    let task = task_for(&board, "a1")?;
    store.store_task(&task).await?;
    let ghost = UserId::new();

    let result = store
        .set_task_assignee(task.id(), ghost, chrono::Utc::now())
        .await;

    assert!(matches!(result, Err(TaskRepositoryError::AssigneeMissing(id)) if id == ghost));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_missing_task_is_not_found() -> Result<(), eyre::Report> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    let missing = TaskId::new();

    let result = store
        .set_task_status(missing, TaskStatus::InProgress, chrono::Utc::now())
        .await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == missing));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_assignee_is_set_null() -> Result<(), eyre::Report> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    let alice = register(&store, "alice").await?;
    let bob = register(&store, "bob").await?;
    let board = board_for(&alice, "Alpha")?;
    store.store_board(&board).await?;
    let task = task_for(&board, "a1")?;
    store.store_task(&task).await?;
    store
        .set_task_assignee(task.id(), bob.id(), chrono::Utc::now())
        .await?;

    store.remove_user(bob.id()).await?;

    let current = store
        .find_task(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    assert_eq!(current.assigned_to(), None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_listing_spans_boards_in_creation_order() -> Result<(), eyre::Report> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    let alice = register(&store, "alice").await?;
    let first_board = board_for(&alice, "Alpha")?;
    let second_board = board_for(&alice, "Gamma")?;
    store.store_board(&first_board).await?;
    store.store_board(&second_board).await?;
    let first = task_for(&first_board, "a1")?;
    store.store_task(&first).await?;
    let second = task_for(&second_board, "g1")?;
    store.store_task(&second).await?;

    let listed = store.list_tasks_for_owner(alice.id()).await?;

    let ids: Vec<TaskId> = listed.iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
    Ok(())
}
