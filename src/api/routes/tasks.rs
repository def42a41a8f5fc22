//! `/api/tasks/` routes.

use crate::api::dto::{Acknowledgement, AssignBody, StatusBody, TaskResponse, UpdateBody};
use crate::api::extract::JsonBody;
use crate::api::{ApiError, AppState, CurrentUser};
use crate::task::domain::TaskId;
use crate::task::services::UpdateTaskRequest;
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};

pub(in crate::api) fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks/", get(list_tasks))
        .route(
            "/tasks/{task_id}/",
            get(get_task)
                .put(update_task)
                .patch(update_task)
                .delete(delete_task),
        )
        .route("/tasks/{task_id}/update_status/", patch(update_status))
        .route("/tasks/{task_id}/assign_user/", patch(assign_user))
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

async fn list_tasks(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.tasks().list_tasks(user).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

async fn get_task(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.tasks().get_task(user, parse_task_id(&raw_id)?).await?;
    Ok(Json(TaskResponse::from(&task)))
}

async fn update_task(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody<UpdateBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task_id = parse_task_id(&raw_id)?;
    let mut request = UpdateTaskRequest::new();
    if let Some(title) = body.title {
        request = request.with_title(title);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }

    let task = state.tasks().update_task(user, task_id, request).await?;
    Ok(Json(TaskResponse::from(&task)))
}

async fn delete_task(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.tasks().delete_task(user, parse_task_id(&raw_id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_status(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody<StatusBody>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let task_id = parse_task_id(&raw_id)?;
    let status = body.status();
    state
        .tasks()
        .update_status(user, task_id, status.as_deref())
        .await?;
    Ok(Json(Acknowledgement {
        status: "Status updated",
    }))
}

async fn assign_user(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody<AssignBody>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let task_id = parse_task_id(&raw_id)?;
    let assignee = body.user_id();
    state
        .tasks()
        .assign_user(user, task_id, assignee.as_deref())
        .await?;
    Ok(Json(Acknowledgement {
        status: "User assigned",
    }))
}
