//! Chatbot wire types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use janai::{ChatMessage, ChatRequest, GroupId};

/// Body of `POST /api/chatbot`
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatbotRequest {
    /// Monitored site (box group) identifier; string or integer
    #[schema(value_type = String, example = "G1")]
    #[serde(default)]
    pub group_id: Option<GroupId>,
    /// Conversation so far, oldest first: `[{"role": "user", "content": "..."}]`
    #[schema(value_type = Vec<Object>)]
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

impl From<ChatbotRequest> for ChatRequest {
    fn from(req: ChatbotRequest) -> Self {
        Self {
            group_id: req.group_id,
            history: req.history,
        }
    }
}

/// Successful chatbot answer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatbotResponse {
    pub answer: String,
}

/// Generic failure body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "AI error")]
    pub error: String,
}
