//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the monitoring backend and the completion model.

mod chat_service;

pub use chat_service::{ChatAnswer, ChatService};

#[cfg(test)]
pub(crate) use chat_service::tests as test_support;
