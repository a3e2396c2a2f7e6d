//! Task API endpoints
//!
//! RESTful API for task CRUD operations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use todo_core::task::{validate, Task, TaskRepository};

use crate::error::TaskApiError;
use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

/// Body of create and update requests; any `id` field is ignored
///
/// A missing or null `description` is a validation failure, not a
/// deserialization failure, so the field is optional here.
#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl From<TaskPayload> for Task {
    fn from(payload: TaskPayload) -> Self {
        Task::new(payload.description.unwrap_or_default()).with_completed(payload.completed)
    }
}

/// Validate the payload before any store call, collecting all field errors
fn validated(payload: TaskPayload) -> Result<Task, TaskApiError> {
    let task = Task::from(payload);
    let errors = validate(&task);
    if errors.is_empty() {
        Ok(task)
    } else {
        Err(TaskApiError::Validation(errors))
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks - List all tasks
async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.task_store().list().await)
}

/// POST /tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Task>), TaskApiError> {
    let task = validated(payload)?;
    let created = state.task_store().create(task).await;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /tasks/{id} - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, TaskApiError> {
    match state.task_store().get(id).await {
        Some(task) => Ok(Json(task)),
        None => Err(TaskApiError::NotFound),
    }
}

/// PUT /tasks/{id} - Replace a task's description and completion flag
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Task>, TaskApiError> {
    let task = validated(payload)?;
    match state.task_store().update(id, task).await {
        Some(updated) => Ok(Json(updated)),
        None => Err(TaskApiError::NotFound),
    }
}

/// DELETE /tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, TaskApiError> {
    if state.task_store().delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(TaskApiError::NotFound)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
