use crate::error::error_response;
use crate::server::router::LipikaState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// `POST /api/chat` — one prompt in, one completion out.
pub async fn chat_handler(
    State(state): State<LipikaState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, Response> {
    if req.message.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "EMPTY_MESSAGE",
            "message must not be empty.",
        ));
    }

    let reply = state
        .gemini
        .generate(&req.message)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(ChatReply { reply }))
}
