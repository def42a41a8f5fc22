//! Translation of service failures into HTTP responses.

use crate::authorization::AccessDenied;
use crate::board::ports::BoardRepositoryError;
use crate::board::services::BoardServiceError;
use crate::identity::ports::{IdentityError, UserDirectoryError};
use crate::task::ports::TaskRepositoryError;
use crate::task::services::TaskServiceError;
use crate::validation::ValidationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

/// Error returned by every handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No valid credentials were presented.
    #[error("authentication required")]
    Unauthenticated,
    /// The resource is absent or not owned by the caller.
    #[error("not found")]
    NotFound,
    /// The caller may not modify a resource it can see.
    #[error(transparent)]
    Forbidden(AccessDenied),
    /// Caller input was rejected.
    #[error(transparent)]
    Validation(ValidationError),
    /// The request body is not decodable JSON of the expected shape.
    #[error("JSON parse error - {0}")]
    MalformedBody(String),
    /// The requested assignee does not exist.
    #[error("User not found")]
    AssigneeNotFound,
    /// A store or identity backend failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<BoardServiceError> for ApiError {
    fn from(err: BoardServiceError) -> Self {
        match err {
            BoardServiceError::Validation(inner) => Self::Validation(inner),
            BoardServiceError::NotFound(_)
            | BoardServiceError::Repository(BoardRepositoryError::NotFound(_)) => Self::NotFound,
            BoardServiceError::Forbidden(denied) => Self::Forbidden(denied),
            BoardServiceError::Repository(inner) => Self::Internal(inner.to_string()),
            BoardServiceError::TaskRepository(inner) => Self::Internal(inner.to_string()),
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(inner) => Self::Validation(inner),
            TaskServiceError::NotFound(_)
            | TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => Self::NotFound,
            TaskServiceError::Forbidden(denied) => Self::Forbidden(denied),
            TaskServiceError::AssigneeNotFound(_) => Self::AssigneeNotFound,
            TaskServiceError::Repository(inner) => Self::Internal(inner.to_string()),
            TaskServiceError::BoardRepository(inner) => Self::Internal(inner.to_string()),
            TaskServiceError::UserDirectory(inner) => Self::Internal(inner.to_string()),
        }
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<UserDirectoryError> for ApiError {
    fn from(err: UserDirectoryError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) | Self::MalformedBody(_) | Self::AssigneeNotFound => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Value {
        match self {
            Self::Unauthenticated => {
                json!({"detail": "Authentication credentials were not provided or are invalid."})
            }
            Self::NotFound => json!({"detail": "Not found."}),
            Self::Forbidden(_) => {
                json!({"detail": "You do not have permission to perform this action."})
            }
            Self::Validation(err) => match err.field() {
                "title" => json!({"title": [err.to_string()]}),
                _ => json!({"status": err.to_string()}),
            },
            Self::MalformedBody(_) => json!({"detail": self.to_string()}),
            Self::AssigneeNotFound => json!({"status": self.to_string()}),
            Self::Internal(_) => json!({"detail": "Internal server error."}),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(message) = &self {
            tracing::error!(error = %message, "request failed");
        }
        (self.status_code(), Json(self.body())).into_response()
    }
}
