use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;
use validator::ValidationErrors;

use crate::common::response::ApiError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing record. Without a message the response carries no body.
    #[error("{}", .0.as_deref().unwrap_or("Not found"))]
    NotFound(Option<String>),

    #[error("{0}")]
    Validation(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(Some(message.into()))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value for field: {}", field),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(None) => StatusCode::NOT_FOUND.into_response(),
            AppError::NotFound(Some(message)) => {
                ApiError(message, StatusCode::NOT_FOUND).into_response()
            }
            AppError::Validation(message) => {
                ApiError(message, StatusCode::BAD_REQUEST).into_response()
            }
            AppError::Multipart(e) => ApiError(e.body_text(), e.status()).into_response(),
            AppError::Store(e) => {
                error!("Store failure: {}", e);
                ApiError(
                    "Internal server error".to_string(),
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
                .into_response()
            }
        }
    }
}
