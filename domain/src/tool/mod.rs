//! Tool domain module
//!
//! Declarations advertised to the model ([`ToolDefinition`]) and the parsed
//! invocation/result types flowing through the executor loop.

pub mod entities;
pub mod value_objects;

pub use entities::{ToolDefinition, ToolParameter};
pub use value_objects::{ExecutionLogEntry, ToolInvocation};
