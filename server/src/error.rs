//! Client-facing errors and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::TodoId;
use utoipa::ToSchema;

/// Errors a handler can return. Each variant maps to exactly one status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation.
    #[error("{0}")]
    BadRequest(String),

    /// No todo is stored under the requested id.
    #[error("todo {0} not found")]
    NotFound(TodoId),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
