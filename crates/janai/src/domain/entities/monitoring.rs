//! Monitoring Records
//!
//! Opaque JSON records returned by the monitoring backend. The orchestration
//! layer never fabricates or edits their contents beyond field redaction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata describing a monitored construction site.
///
/// Carries at least `cameras` and `boxs`, which must not reach the
/// completion model (see [`crate::domain::services::redaction`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupInfo(Value);

impl GroupInfo {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Whether the record carries a top-level field with this name
    pub fn has_field(&self, name: &str) -> bool {
        self.0.as_object().is_some_and(|o| o.contains_key(name))
    }

    /// Compact JSON text for embedding in a prompt
    pub fn to_compact_json(&self) -> String {
        self.0.to_string()
    }
}

/// Current sensor readings of a group, verbatim from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorSnapshot(Value);

impl SensorSnapshot {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Compact JSON text for embedding in a prompt
    pub fn to_compact_json(&self) -> String {
        self.0.to_string()
    }
}
