//! Service Ports
//!
//! Abstract interfaces for external services.

mod completion;
mod monitoring;

pub use completion::*;
pub use monitoring::*;
