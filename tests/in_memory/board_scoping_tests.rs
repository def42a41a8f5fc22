//! Owner-scoped visibility of boards and their tasks.

use super::helpers::{Services, services};
use rstest::rstest;
use workboard::board::services::{BoardServiceError, NewTaskRequest};
use workboard::task::services::TaskServiceError;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_user_sees_only_their_boards(services: Services) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let bob = services.register("bob").await?;
    let (alice_board, _) = services.board_with_task(&alice, "Alpha", "a1").await?;
    let (bob_board, _) = services.board_with_task(&bob, "Beta", "b1").await?;

    let alice_boards = services.boards.list_boards(alice.id()).await?;
    let bob_boards = services.boards.list_boards(bob.id()).await?;

    assert_eq!(alice_boards, vec![alice_board]);
    assert_eq!(bob_boards, vec![bob_board]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_resources_are_indistinguishable_from_missing(
    services: Services,
) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let bob = services.register("bob").await?;
    let (board, task) = services.board_with_task(&alice, "Alpha", "a1").await?;

    let board_read = services.boards.get_board(bob.id(), board.id()).await;
    let board_write = services
        .boards
        .add_task(bob.id(), board.id(), NewTaskRequest::new("sneaky"))
        .await;
    let task_read = services.tasks.get_task(bob.id(), task.id()).await;
    let task_write = services
        .tasks
        .update_status(bob.id(), task.id(), Some("Completed"))
        .await;

    assert!(matches!(board_read, Err(BoardServiceError::NotFound(_))));
    assert!(matches!(board_write, Err(BoardServiceError::NotFound(_))));
    assert!(matches!(task_read, Err(TaskServiceError::NotFound(_))));
    assert!(matches!(task_write, Err(TaskServiceError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_listing_covers_all_owned_boards(services: Services) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let bob = services.register("bob").await?;
    let (_, first) = services.board_with_task(&alice, "Alpha", "a1").await?;
    let (_, second) = services.board_with_task(&alice, "Gamma", "g1").await?;
    services.board_with_task(&bob, "Beta", "b1").await?;

    let listed = services.tasks.list_tasks(alice.id()).await?;

    assert_eq!(listed, vec![first, second]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_board_cascades_to_tasks(services: Services) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let (board, task) = services.board_with_task(&alice, "Alpha", "a1").await?;

    services.boards.delete_board(alice.id(), board.id()).await?;

    assert!(services.tasks.list_tasks(alice.id()).await?.is_empty());
    assert!(matches!(
        services.tasks.get_task(alice.id(), task.id()).await,
        Err(TaskServiceError::NotFound(_))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_detail_lists_tasks_oldest_first(services: Services) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let (board, first) = services.board_with_task(&alice, "Alpha", "first").await?;
    let second = services
        .boards
        .add_task(alice.id(), board.id(), NewTaskRequest::new("second"))
        .await?;

    let detail = services.boards.get_board_detail(alice.id(), board.id()).await?;

    assert_eq!(detail.board, board);
    assert_eq!(detail.tasks, vec![first, second]);
    Ok(())
}
