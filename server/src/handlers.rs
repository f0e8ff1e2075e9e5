use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use serde::Deserialize;
use todo_core::{Todo, TodoId};
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorBody};
use crate::openapi::TodoDoc;
use crate::AppState;

/// Request body for `POST /todos` and `PUT /todos/{id}`.
///
/// `title` is optional at the serde level so a missing title reaches
/// validation and comes back as a 400 rather than an extractor rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    #[schema(example = "Buy milk")]
    pub title: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoInput {
    /// Split into store arguments, rejecting a missing or blank title.
    pub fn validate(self) -> Result<(String, bool), ApiError> {
        match self.title {
            Some(title) if !title.trim().is_empty() => Ok((title, self.is_complete)),
            Some(_) => Err(ApiError::BadRequest("title must not be blank".into())),
            None => Err(ApiError::BadRequest("title is required".into())),
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = String)),
    tag = "health"
)]
pub async fn health() -> Json<&'static str> {
    Json("Healthy!")
}

#[utoipa::path(
    get,
    path = "/todos",
    responses((status = 200, description = "All stored todos", body = [TodoDoc])),
    tag = "todos"
)]
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let todos = state.store.list();
    debug!(count = todos.len(), "listed todos");
    Json(todos)
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = u64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo", body = TodoDoc),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    state.store.get(id).map(Json).ok_or(ApiError::NotFound(id))
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body = TodoInput,
    responses(
        (status = 201, description = "Created", body = TodoDoc,
            headers(("location" = String, description = "Path of the new todo"))),
        (status = 400, description = "Missing or blank title", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoInput>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Todo>), ApiError> {
    let (title, is_complete) = input
        .validate()
        .inspect_err(|e| warn!(error = %e, "rejected todo create"))?;

    let todo = state.store.create(title, is_complete);
    info!(id = todo.id, title = %todo.title, "created todo");

    let location = format!("/todos/{}", todo.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = u64, Path, description = "Todo id")),
    request_body = TodoInput,
    responses(
        (status = 200, description = "Updated", body = TodoDoc),
        (status = 400, description = "Missing or blank title", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, ApiError> {
    let (title, is_complete) = input
        .validate()
        .inspect_err(|e| warn!(id, error = %e, "rejected todo update"))?;

    let todo = state
        .store
        .update(id, title, is_complete)
        .ok_or(ApiError::NotFound(id))?;
    info!(id, title = %todo.title, is_complete, "updated todo");
    Ok(Json(todo))
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = u64, Path, description = "Todo id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id", body = ErrorBody)
    ),
    tag = "todos"
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete(id) {
        return Err(ApiError::NotFound(id));
    }
    info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
