//! Error types for the Paperdesk server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paperdesk_core::{ErrorKind, ErrorState};
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{}", .0.message)]
    Workspace(ErrorState),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::UnknownTool(name) => (
                StatusCode::NOT_FOUND,
                "UNKNOWN_TOOL",
                format!("Tool '{}' not found", name),
            ),
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ServerError::Workspace(state) => {
                let (status, code) = match state.kind {
                    ErrorKind::Unsupported => {
                        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_TYPE")
                    }
                    ErrorKind::Password => (StatusCode::BAD_REQUEST, "PASSWORD_PROTECTED"),
                    ErrorKind::Corrupted => (StatusCode::UNPROCESSABLE_ENTITY, "CORRUPTED_FILE"),
                    ErrorKind::Generic => (StatusCode::BAD_REQUEST, "PROCESSING_FAILED"),
                };
                (status, code, state.message.clone())
            }
            ServerError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg.clone(),
            ),
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ErrorState> for ServerError {
    fn from(state: ErrorState) -> Self {
        ServerError::Workspace(state)
    }
}
