use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notes_engine::NotesError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Notes(#[from] NotesError),

    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("config error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Notes(e) if e.is_validation() => {
                (StatusCode::BAD_REQUEST, "Please enter a topic")
            }
            _ => {
                tracing::error!(error = %self, "note generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate notes. Please try again.",
                )
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
