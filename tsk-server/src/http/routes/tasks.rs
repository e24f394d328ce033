//! Task endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::db::repos::{Task, TaskRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, TaskId, TaskQuery};
use crate::models::{ReorderRequest, TaskFields};
use crate::state::AppState;

/// GET /tasks - open tasks, optionally `?category_id=N`
async fn list_tasks(
    State(state): State<AppState>,
    TaskQuery(filter): TaskQuery,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = TaskRepo::new(state.pool()).list(filter).await?;
    Ok(Json(tasks))
}

/// POST /tasks - create a task at the end of its sibling group
async fn create_task(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<TaskFields>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = TaskRepo::new(state.pool()).create(&fields).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/{id} - overwrite fields, children follow the category
async fn update_task(
    State(state): State<AppState>,
    TaskId(id): TaskId,
    JsonBody(fields): JsonBody<TaskFields>,
) -> Result<StatusCode, ApiError> {
    TaskRepo::new(state.pool()).update(id, &fields).await?;
    Ok(StatusCode::OK)
}

/// POST /tasks/{id}/complete - delete the task and its subtasks
async fn complete_task(State(state): State<AppState>, TaskId(id): TaskId) -> Result<StatusCode, ApiError> {
    TaskRepo::new(state.pool()).complete(id).await?;
    Ok(StatusCode::OK)
}

/// POST /tasks/reorder - array position becomes order, parent is overwritten
async fn reorder_tasks(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ReorderRequest>,
) -> Result<StatusCode, ApiError> {
    TaskRepo::new(state.pool()).reorder(&req.tasks).await?;
    Ok(StatusCode::OK)
}

/// Task routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/reorder", post(reorder_tasks))
        .route("/tasks/{id}", put(update_task))
        .route("/tasks/{id}/complete", post(complete_task))
}
