//! Status and assignment lifecycle through the public services.

use super::helpers::{Services, make_user, services};
use rstest::rstest;
use workboard::identity::domain::User;
use workboard::identity::ports::UserDirectory;
use workboard::task::domain::TaskStatus;
use workboard::task::services::TaskServiceError;
use workboard::validation::ValidationError;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_walks_freely_between_values(services: Services) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let (_, task) = services.board_with_task(&alice, "Alpha", "a1").await?;

    for (raw, expected) in [
        ("Completed", TaskStatus::Completed),
        ("InProgress", TaskStatus::InProgress),
        ("InProgress", TaskStatus::InProgress),
        ("ToDo", TaskStatus::ToDo),
    ] {
        let updated = services
            .tasks
            .update_status(alice.id(), task.id(), Some(raw))
            .await?;
        assert_eq!(updated.status(), expected);
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_status_update_keeps_previous_value(
    services: Services,
) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let (_, task) = services.board_with_task(&alice, "Alpha", "a1").await?;
    services
        .tasks
        .update_status(alice.id(), task.id(), Some("InProgress"))
        .await?;

    let result = services
        .tasks
        .update_status(alice.id(), task.id(), Some("Finished"))
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Validation(ValidationError::InvalidStatus(_)))
    ));
    let current = services.tasks.get_task(alice.id(), task.id()).await?;
    assert_eq!(current.status(), TaskStatus::InProgress);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignment_reflects_latest_user_record(services: Services) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let bob = services.register("bob").await?;
    let (_, task) = services.board_with_task(&alice, "Alpha", "a1").await?;
    services
        .tasks
        .assign_user(alice.id(), task.id(), Some(&bob.id().to_string()))
        .await?;

    let renamed = User::new(bob.id(), "robert", "robert@example.com");
    services.store.upsert_user(&renamed).await?;

    let current = services.tasks.get_task(alice.id(), task.id()).await?;
    assert_eq!(current.assigned_to(), Some(&renamed));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unregistered_user_cannot_be_assigned(services: Services) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let (_, task) = services.board_with_task(&alice, "Alpha", "a1").await?;
    let ghost = make_user("ghost");

    let result = services
        .tasks
        .assign_user(alice.id(), task.id(), Some(&ghost.id().to_string()))
        .await;

    assert!(matches!(result, Err(TaskServiceError::AssigneeNotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_assignee_leaves_task_unassigned(services: Services) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let bob = services.register("bob").await?;
    let (_, task) = services.board_with_task(&alice, "Alpha", "a1").await?;
    services
        .tasks
        .assign_user(alice.id(), task.id(), Some(&bob.id().to_string()))
        .await?;

    services.store.remove_user(bob.id()).await?;

    let current = services.tasks.get_task(alice.id(), task.id()).await?;
    assert_eq!(current.assigned_to(), None);
    assert_eq!(current.title().as_str(), "a1");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_owner_takes_boards_and_tasks(services: Services) -> Result<(), eyre::Report> {
    let alice = services.register("alice").await?;
    let bob = services.register("bob").await?;
    services.board_with_task(&alice, "Alpha", "a1").await?;
    let (_, bob_task) = services.board_with_task(&bob, "Beta", "b1").await?;
    services
        .tasks
        .assign_user(bob.id(), bob_task.id(), Some(&alice.id().to_string()))
        .await?;

    services.store.remove_user(alice.id()).await?;

    assert!(services.boards.list_boards(alice.id()).await?.is_empty());
    assert!(services.tasks.list_tasks(alice.id()).await?.is_empty());
    let survivor = services.tasks.get_task(bob.id(), bob_task.id()).await?;
    assert_eq!(survivor.assigned_to(), None);
    Ok(())
}
