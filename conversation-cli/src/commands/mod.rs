//! Command implementations for the conversation-log CLI

pub mod config;
pub mod history;
pub mod messages;

pub use config::*;
pub use history::*;
pub use messages::*;
