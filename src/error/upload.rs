use axum::extract::multipart::MultipartError;
use axum::{http::StatusCode, response::IntoResponse, response::Response};
use thiserror::Error as ThisError;

use super::error_response;

/// Failures of the scan upload surface.
#[derive(Debug, ThisError)]
pub enum UploadError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("No selected file")]
    EmptyFilename,

    #[error("Unsupported file type: {0}")]
    UnsupportedExtension(String),

    #[error("Malformed multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            UploadError::MissingFile => {
                error_response(StatusCode::BAD_REQUEST, "NO_FILE", "No file uploaded.")
            }

            UploadError::EmptyFilename => {
                error_response(StatusCode::BAD_REQUEST, "NO_FILENAME", "No selected file.")
            }

            UploadError::UnsupportedExtension(ext) => error_response(
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_TYPE",
                format!("Unsupported file type: {ext}."),
            ),

            UploadError::Multipart(err) => {
                tracing::warn!(error = %err, "Upload request was malformed");
                error_response(
                    StatusCode::BAD_REQUEST,
                    "BAD_MULTIPART",
                    "Malformed multipart request.",
                )
            }

            UploadError::Io(err) => {
                tracing::error!(error = %err, "Failed to store uploaded scan");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Failed to store the uploaded file.",
                )
            }
        }
    }
}
