//! JanAI API Models
//!
//! - Chatbot: request/response bodies of `/api/chatbot`

mod chat;

pub use chat::*;
