//! `/api/workboards/` routes.

use crate::api::dto::{BoardResponse, CreateBody, TaskResponse, UpdateBody};
use crate::api::extract::JsonBody;
use crate::api::{ApiError, AppState, CurrentUser};
use crate::board::domain::BoardId;
use crate::board::services::{
    BoardDetail, CreateBoardRequest, NewTaskRequest, UpdateBoardRequest,
};
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

pub(in crate::api) fn router() -> Router<AppState> {
    Router::new()
        .route("/workboards/", get(list_boards).post(create_board))
        .route(
            "/workboards/{board_id}/",
            get(get_board)
                .put(update_board)
                .patch(update_board)
                .delete(delete_board),
        )
        .route("/workboards/{board_id}/add_task/", post(add_task))
}

/// Malformed identifiers cannot name a visible board, so they read as 404.
fn parse_board_id(raw: &str) -> Result<BoardId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

async fn list_boards(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<BoardResponse>>, ApiError> {
    let details = state.boards().list_board_details(user).await?;
    let owner = state.user_response(user).await?;
    Ok(Json(
        details
            .iter()
            .map(|detail| BoardResponse::new(detail, owner.clone()))
            .collect(),
    ))
}

async fn create_board(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    JsonBody(body): JsonBody<CreateBody>,
) -> Result<(StatusCode, Json<BoardResponse>), ApiError> {
    let request = CreateBoardRequest::new(body.title)
        .with_description(body.description.unwrap_or_default());
    let board = state.boards().create_board(user, request).await?;
    let detail = BoardDetail {
        board,
        tasks: Vec::new(),
    };
    let owner = state.user_response(user).await?;
    Ok((StatusCode::CREATED, Json(BoardResponse::new(&detail, owner))))
}

async fn get_board(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
) -> Result<Json<BoardResponse>, ApiError> {
    let board_id = parse_board_id(&raw_id)?;
    let detail = state.boards().get_board_detail(user, board_id).await?;
    let owner = state.user_response(detail.board.owner()).await?;
    Ok(Json(BoardResponse::new(&detail, owner)))
}

async fn update_board(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody<UpdateBody>,
) -> Result<Json<BoardResponse>, ApiError> {
    let board_id = parse_board_id(&raw_id)?;
    let mut request = UpdateBoardRequest::new();
    if let Some(title) = body.title {
        request = request.with_title(title);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }

    state.boards().update_board(user, board_id, request).await?;
    let detail = state.boards().get_board_detail(user, board_id).await?;
    let owner = state.user_response(detail.board.owner()).await?;
    Ok(Json(BoardResponse::new(&detail, owner)))
}

async fn delete_board(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let board_id = parse_board_id(&raw_id)?;
    state.boards().delete_board(user, board_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_task(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody<CreateBody>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let board_id = parse_board_id(&raw_id)?;
    let request =
        NewTaskRequest::new(body.title).with_description(body.description.unwrap_or_default());
    let task = state.boards().add_task(user, board_id, request).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}
