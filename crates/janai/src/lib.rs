//! JanAI Domain Library
//!
//! Core domain types and interfaces for the JanAI monitoring assistant.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Conversation and monitoring records (ChatMessage, ChatRequest, GroupInfo, SensorSnapshot)
//!   - `services/`: Context assembly and the data-need heuristic
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Completion model and monitoring backend interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use janai::domain::{ChatRequest, ContextBuilder};
//! use janai::ports::{CompletionClient, MonitoringGateway};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    needs_sensor_data, strip_fields, AssistantReply, ChatMessage, ChatRequest, ContextBuilder,
    DomainError, GroupId, GroupInfo, MessageRole, SensorSnapshot, DATA_NEED_PHRASES,
    MAX_HISTORY, PERSONA_RULES,
};
pub use ports::{CompletionClient, CompletionResponse, MonitoringGateway, TokenUsage};
