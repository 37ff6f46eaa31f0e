mod gemini;
mod upload;

pub use gemini::GeminiError;
pub use upload::UploadError;

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

/// Standardized API error response payload.
#[derive(Debug, Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}

pub(crate) fn error_response(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    let body = ApiErrorBody {
        inner: ApiErrorObject {
            code: code.to_string(),
            message: message.into(),
        },
    };
    (status, Json(body)).into_response()
}
