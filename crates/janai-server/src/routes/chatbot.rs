//! Chatbot Route - two-phase monitoring assistant

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use janai::ChatRequest;

use crate::error::ApiError;
use crate::models::{ChatbotRequest, ChatbotResponse, ErrorResponse};
use crate::AppState;

/// Answer a chat turn, fetching live sensor data when the model asks for it
#[utoipa::path(
    post,
    path = "/api/chatbot",
    request_body = ChatbotRequest,
    responses(
        (status = 200, description = "Assistant answer", body = ChatbotResponse),
        (status = 500, description = "Any failure (invalid request, backend or model error)", body = ErrorResponse)
    ),
    tag = "Chatbot"
)]
pub async fn chatbot(
    State(state): State<AppState>,
    payload: Result<Json<ChatbotRequest>, JsonRejection>,
) -> Result<Json<ChatbotResponse>, ApiError> {
    let Json(payload) = payload?;
    let request = ChatRequest::from(payload);

    let answer = state.chat_service.answer(&request).await?;

    tracing::info!(
        used_sensor_data = answer.used_sensor_data,
        answer_len = answer.text.len(),
        "Chatbot answered"
    );

    Ok(Json(ChatbotResponse {
        answer: answer.text,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/chatbot", post(chatbot))
}
