//! Infrastructure layer for conductor.
//!
//! Adapters behind the application ports: the OpenAI-compatible chat
//! gateway, the web-backed tool registry, the default agent catalog,
//! file/env configuration, and run-trace export.

pub mod agents;
pub mod config;
pub mod gateway;
pub mod tools;
pub mod trace;

pub use agents::default_catalog;
pub use config::{ConfigLoader, FileConfig};
pub use gateway::OpenAiGateway;
pub use tools::ToolRegistry;
pub use trace::{TraceExporter, TraceFiles};
