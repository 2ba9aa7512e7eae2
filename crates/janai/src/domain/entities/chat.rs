//! Chat Request Entities

use serde::{Deserialize, Deserializer, Serialize};

use super::message::ChatMessage;
use crate::domain::errors::DomainError;

/// Identifier of a monitored construction site (box group).
///
/// Accepts either a JSON string or an integer on the wire and is kept
/// as its trimmed textual form. Fractional numbers are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGroupId {
    Text(String),
    Number(serde_json::Number),
}

impl GroupId {
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "group_id must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for GroupId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = match RawGroupId::deserialize(deserializer)? {
            RawGroupId::Text(s) => s,
            RawGroupId::Number(n) => match (n.as_u64(), n.as_i64()) {
                (Some(u), _) => u.to_string(),
                (None, Some(i)) => i.to_string(),
                (None, None) => {
                    return Err(serde::de::Error::custom(format!(
                        "group_id must be a string or an integer, got {n}"
                    )))
                }
            },
        };
        Self::parse(text).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inbound chat request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub group_id: Option<GroupId>,
    /// Caller-supplied conversation, oldest first
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(group_id: GroupId, history: Vec<ChatMessage>) -> Self {
        Self {
            group_id: Some(group_id),
            history,
        }
    }

    /// The group this request is about, or a validation error if absent
    pub fn require_group_id(&self) -> Result<&GroupId, DomainError> {
        self.group_id
            .as_ref()
            .ok_or_else(|| DomainError::Validation("group_id is required".to_string()))
    }
}

/// Raw text the completion model produced for one phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
}

impl AssistantReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
