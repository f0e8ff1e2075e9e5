use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::error::ErrorBody;
use crate::handlers::{self, TodoInput};

/// Schema mirror of `todo_core::Todo`, which carries no doc derives.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Todo)]
pub struct TodoDoc {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Buy milk")]
    pub title: String,
    pub is_complete: bool,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        description = "CRUD over an in-memory collection of todos."
    ),
    paths(
        handlers::health,
        handlers::list_todos,
        handlers::get_todo,
        handlers::create_todo,
        handlers::update_todo,
        handlers::delete_todo,
    ),
    components(schemas(TodoDoc, TodoInput, ErrorBody)),
    tags(
        (name = "health", description = "Liveness"),
        (name = "todos", description = "Todo CRUD operations")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
