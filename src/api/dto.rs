//! Request and response bodies.

use crate::board::services::BoardDetail;
use crate::identity::domain::User;
use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A user as rendered in `owner` and `assigned_to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().into_inner(),
            username: user.username().to_owned(),
            email: user.email().to_owned(),
        }
    }
}

/// A task body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description; empty when unset.
    pub description: String,
    /// One of `ToDo`, `InProgress`, `Completed`.
    pub status: String,
    /// Assignee, or `null`.
    pub assigned_to: Option<UserResponse>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status().as_str().to_owned(),
            assigned_to: task.assigned_to().map(UserResponse::from),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// A board body with its nested tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardResponse {
    /// Board identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description; empty when unset.
    pub description: String,
    /// Owning user.
    pub owner: UserResponse,
    /// Tasks on the board, oldest first.
    pub tasks: Vec<TaskResponse>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl BoardResponse {
    /// Renders `detail` with its owner already resolved.
    #[must_use]
    pub fn new(detail: &BoardDetail, owner: UserResponse) -> Self {
        let board = &detail.board;
        Self {
            id: board.id().into_inner(),
            title: board.title().as_str().to_owned(),
            description: board.description().as_str().to_owned(),
            owner,
            tasks: detail.tasks.iter().map(TaskResponse::from).collect(),
            created_at: board.created_at(),
            updated_at: board.updated_at(),
        }
    }
}

/// Body of board creation and `add_task`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CreateBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT`/`PATCH` on boards and tasks; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct UpdateBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `update_status`.
///
/// `status` is accepted as any JSON value so that a non-string reports
/// "Invalid status" instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct StatusBody {
    #[serde(default)]
    pub status: Option<Value>,
}

impl StatusBody {
    pub(crate) fn status(&self) -> Option<String> {
        present_scalar(self.status.as_ref())
    }
}

/// Body of `assign_user`.
///
/// `user_id` is accepted as any JSON value so that a numeric or otherwise
/// malformed identifier reports "User not found" instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AssignBody {
    #[serde(default)]
    pub user_id: Option<Value>,
}

impl AssignBody {
    pub(crate) fn user_id(&self) -> Option<String> {
        present_scalar(self.user_id.as_ref())
    }
}

/// Renders a loosely typed field as text, or `None` when it is absent or
/// falsy (`null`, `false`, zero, or an empty string, array, or object).
fn present_scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(number) if number.as_f64().is_some_and(|n| n.abs() < f64::EPSILON) => None,
        Value::String(raw) if raw.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(fields) if fields.is_empty() => None,
        Value::String(raw) => Some(raw.clone()),
        other => Some(other.to_string()),
    }
}

/// Acknowledgement body of the status and assignment endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Acknowledgement {
    pub status: &'static str,
}
