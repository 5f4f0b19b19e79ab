use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, Clone, Copy)]
pub enum ErrorNumber {
    MalformedUpload = 1001,
    SourceUnavailable = 1002,
    InternalError = 1003,
}

#[derive(Debug)]
pub struct ErrorResponse {
    pub code: ErrorNumber,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorNumber, message: String) -> Self {
        Self { code, message }
    }

    fn status(&self) -> StatusCode {
        match self.code {
            ErrorNumber::MalformedUpload => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorNumber::SourceUnavailable => StatusCode::NOT_FOUND,
            ErrorNumber::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(json!({
                "error_code": self.code as u32,
                "message": self.message
            })),
        )
            .into_response()
    }
}
