//! Context Builder
//!
//! Assembles the exact message sequence sent to the completion model for
//! each phase of a chat request:
//!
//! - Phase 1: `[system: rules] + [system: group (no cameras)] + history`
//! - Phase 2: `[system: rules] + [system: group (no cameras, no boxs)] + history
//!   + [assistant: phase-1 reply] + [user: sensor data]`
//!
//! History is trimmed to the newest [`MAX_HISTORY`] turns. Structured records
//! are embedded as compact JSON inside message text.

use super::redaction::{strip_fields, PHASE_ONE_REDACTED_FIELDS, PHASE_TWO_REDACTED_FIELDS};
use crate::domain::entities::{AssistantReply, ChatMessage, GroupInfo, SensorSnapshot};

/// Number of most recent history turns forwarded to the model
pub const MAX_HISTORY: usize = 10;

/// Fixed persona and refusal policy of the monitoring assistant
pub const PERSONA_RULES: &str = "\
Bạn là trợ lý hệ thống quan trắc JanAI
- Chỉ trả lời liên quan đến dữ liệu quan trắc của công trình
- Nếu câu hỏi ngoài phạm vi, trả lời: \"Xin lỗi, tôi chỉ hỗ trợ thông tin liên quan đến trạm quan trắc của hệ thống.\"
- Không tự bịa số liệu
- Không tự suy diễn ra tên cảm biến, nếu không biết hãy hiển thị theo mã cảm biến
- Nếu thiếu dữ liệu thực tế, hãy yêu cầu backend cung cấp.
- Không được tiết lộ hoặc nhắc đến các giá trị ID như box_id, group_id, zone_id, nếu người hỏi hoặc cố tình yêu cầu ID, hãy từ chối và nhắc rằng đây là thông tin nội bộ.";

const GROUP_CONTEXT_LABEL: &str = "Thông tin công trình";
const SENSOR_DATA_LABEL: &str = "Dữ liệu cảm biến thực tế";

/// Newest `max` turns of `history`, oldest first
pub fn trim_history(history: &[ChatMessage], max: usize) -> &[ChatMessage] {
    &history[history.len().saturating_sub(max)..]
}

/// Per-request message assembler.
///
/// Holds the phase-1 view of the group (cameras already removed) and the
/// trimmed history; the phase-2 view is derived from the phase-1 view only
/// when phase-2 messages are built.
#[derive(Debug, Clone)]
pub struct ContextBuilder<'a> {
    group: GroupInfo,
    history: &'a [ChatMessage],
}

impl<'a> ContextBuilder<'a> {
    pub fn new(raw_group: &GroupInfo, history: &'a [ChatMessage]) -> Self {
        let trimmed = trim_history(history, MAX_HISTORY);
        if trimmed.len() < history.len() {
            tracing::debug!(
                dropped = history.len() - trimmed.len(),
                kept = trimmed.len(),
                "History trimmed"
            );
        }

        Self {
            group: strip_fields(raw_group, PHASE_ONE_REDACTED_FIELDS),
            history: trimmed,
        }
    }

    /// History turns that will be forwarded
    pub fn history(&self) -> &[ChatMessage] {
        self.history
    }

    /// Messages for the first completion call
    pub fn phase_one(&self) -> Vec<ChatMessage> {
        self.preamble(&self.group)
    }

    /// Messages for the data-augmented second completion call
    pub fn phase_two(&self, reply: &AssistantReply, sensors: &SensorSnapshot) -> Vec<ChatMessage> {
        let group = strip_fields(&self.group, PHASE_TWO_REDACTED_FIELDS);
        let mut messages = self.preamble(&group);
        messages.push(ChatMessage::assistant(reply.text.clone()));
        messages.push(ChatMessage::user(format!(
            "{SENSOR_DATA_LABEL}: {}",
            sensors.to_compact_json()
        )));
        messages
    }

    fn preamble(&self, group: &GroupInfo) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 4);
        messages.push(ChatMessage::system(PERSONA_RULES));
        messages.push(ChatMessage::system(format!(
            "{GROUP_CONTEXT_LABEL}: {}",
            group.to_compact_json()
        )));
        messages.extend_from_slice(self.history);
        messages
    }
}
