use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned with every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    #[schema(value_type = Option<String>)]
    pub data: Option<()>,
}

impl ApiResponse {
    pub fn error(message: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: message.to_string(),
            data: None,
        }
    }
}

pub struct ApiError(pub String, pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (message, status) = (self.0, self.1);
        let response = ApiResponse::error(&message);
        (status, Json(response)).into_response()
    }
}
