//! Chat Application Service (Use Case)
//!
//! Two-phase answer protocol for one chat request:
//!
//! 1. validate the request and fetch the group record
//! 2. phase 1: complete over rules + group context + trimmed history
//! 3. if the reply does not ask for data, it is the answer
//! 4. otherwise fetch live sensor data and run phase 2; its reply is the answer
//!
//! Every external call happens at most once and strictly in sequence. Any
//! failure aborts the whole request; a phase-1 reply is never returned once
//! phase 2 has been entered.

use std::sync::Arc;

use janai::{
    needs_sensor_data, AssistantReply, ChatMessage, ChatRequest, CompletionClient, ContextBuilder,
    DomainError, MonitoringGateway,
};

/// Final answer for a chat request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAnswer {
    pub text: String,
    /// Whether live sensor data was fetched for this answer
    pub used_sensor_data: bool,
}

/// Application service for chat requests
pub struct ChatService {
    completion: Arc<dyn CompletionClient>,
    gateway: Arc<dyn MonitoringGateway>,
}

impl ChatService {
    pub fn new(completion: Arc<dyn CompletionClient>, gateway: Arc<dyn MonitoringGateway>) -> Self {
        Self {
            completion,
            gateway,
        }
    }

    /// Answer a chat request
    pub async fn answer(&self, request: &ChatRequest) -> Result<ChatAnswer, DomainError> {
        // 1. Validate
        let group_id = request.require_group_id()?;

        // 2. Fetch group
        let group = self.gateway.fetch_group_info(group_id).await?;
        let context = ContextBuilder::new(&group, &request.history);

        tracing::info!(
            history = request.history.len(),
            forwarded = context.history().len(),
            model = self.completion.model_id(),
            "Chat request accepted"
        );

        // 3. Phase 1
        let first_messages = context.phase_one();
        tracing::debug!(messages = ?first_messages, "Phase 1 messages");
        let first = self.complete("phase1", &first_messages).await?;

        // 4. Decide
        if !needs_sensor_data(&first.text) {
            tracing::info!("Phase 1 answered directly");
            return Ok(ChatAnswer {
                text: first.into_text(),
                used_sensor_data: false,
            });
        }

        tracing::info!("Phase 1 reply asks for sensor data");

        // 5. Fetch sensors
        let sensors = self.gateway.fetch_sensor_snapshot(group_id).await?;

        // 6. Phase 2
        let second_messages = context.phase_two(&first, &sensors);
        tracing::debug!(messages = ?second_messages, "Phase 2 messages");
        let second = self.complete("phase2", &second_messages).await?;

        Ok(ChatAnswer {
            text: second.into_text(),
            used_sensor_data: true,
        })
    }

    async fn complete(
        &self,
        phase: &'static str,
        messages: &[ChatMessage],
    ) -> Result<AssistantReply, DomainError> {
        let response = self.completion.complete(messages).await?;

        tracing::info!(
            phase,
            provider = self.completion.provider_name(),
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Completion finished"
        );

        Ok(AssistantReply::new(response.content))
    }
}
