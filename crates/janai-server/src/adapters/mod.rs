//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod monitoring;
pub mod openai;

// Re-exports
pub use monitoring::HttpMonitoringGateway;
pub use openai::OpenAiCompletionClient;
