//! Completion Client Port
//!
//! Abstract interface for chat-completion invocations: submit an ordered
//! list of role-tagged messages, receive one reply.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::ChatMessage;
use crate::domain::errors::DomainError;

/// Response from a completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: TokenUsage,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Chat completion interface.
///
/// Implementations make exactly one attempt per call and never retry;
/// an empty or missing reply is reported as [`DomainError::Completion`].
///
/// # Example
///
/// ```rust,ignore
/// use janai::ports::CompletionClient;
///
/// struct OpenAiCompletionClient { /* ... */ }
///
/// #[async_trait]
/// impl CompletionClient for OpenAiCompletionClient {
///     async fn complete(&self, messages: &[ChatMessage])
///         -> Result<CompletionResponse, DomainError> {
///         // POST /chat/completions
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a completion from messages
    async fn complete(&self, messages: &[ChatMessage]) -> Result<CompletionResponse, DomainError>;

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
