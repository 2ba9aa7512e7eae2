//! Domain Services
//!
//! Deterministic, I/O-free logic used by the chat orchestrator.

pub mod context;
pub mod intent;
pub mod redaction;

pub use context::*;
pub use intent::*;
pub use redaction::*;
