//! Domain Entities
//!
//! Request-scoped values. Nothing here is persisted or cached across requests.

mod chat;
mod message;
mod monitoring;

pub use chat::*;
pub use message::*;
pub use monitoring::*;
