//! Conversation channel - the context sent to the model backend

pub mod channel;
pub mod entities;

pub use channel::Channel;
pub use entities::{Role, ToolCall, Turn};
