//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ChatbotRequest, ChatbotResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::chatbot::chatbot),
    components(schemas(ChatbotRequest, ChatbotResponse, ErrorResponse)),
    tags(
        (name = "Chatbot", description = "JanAI monitoring assistant")
    ),
    info(
        title = "JanAI API",
        description = "Chat proxy enriching model prompts with monitoring data"
    )
)]
pub struct ApiDoc;
