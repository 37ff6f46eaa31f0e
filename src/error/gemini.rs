use axum::{http::StatusCode, response::IntoResponse, response::Response};
use lipika_schema::gemini::GeminiErrorObject;
use thiserror::Error as ThisError;

use super::error_response;

/// Failures of the Gemini upstream client.
///
/// An empty-candidate success body is not an error; the completion client
/// skips it and moves to the next endpoint candidate.
#[derive(Debug, ThisError)]
pub enum GeminiError {
    /// Credential absent; raised before any network I/O is attempted.
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    /// Transport-level failure (DNS, connect, timeouts, etc).
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from a reachable endpoint. Carries the
    /// best-effort decoded upstream error body; a body that does not decode
    /// is simply `None`, never a second error path.
    #[error("Upstream error with status: {status}")]
    UpstreamStatus {
        status: StatusCode,
        body: Option<GeminiErrorObject>,
    },

    /// Success-status response whose body does not parse.
    #[error("Failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Every endpoint candidate was tried and none produced usable output,
    /// with no concrete error recorded along the way.
    #[error("All Gemini endpoints failed")]
    Exhausted,
}

impl IntoResponse for GeminiError {
    fn into_response(self) -> Response {
        match self {
            GeminiError::MissingApiKey => error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "NOT_CONFIGURED",
                "Gemini API key is not configured.",
            ),

            GeminiError::Transport(err) => {
                tracing::warn!(error = %err, status = ?err.status(), "Gemini transport error");
                error_response(
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Upstream service error.",
                )
            }

            GeminiError::UpstreamStatus { status, body } => {
                tracing::warn!(%status, body = ?body, "Gemini upstream rejected the request");
                error_response(
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_STATUS",
                    format!("Upstream returned {status}."),
                )
            }

            GeminiError::Decode(err) => {
                tracing::warn!(error = %err, "Gemini upstream payload did not parse");
                error_response(
                    StatusCode::BAD_GATEWAY,
                    "BAD_UPSTREAM_PAYLOAD",
                    "Failed to parse upstream response.",
                )
            }

            GeminiError::Exhausted => error_response(
                StatusCode::BAD_GATEWAY,
                "ALL_ENDPOINTS_FAILED",
                "All Gemini endpoints failed.",
            ),
        }
    }
}
