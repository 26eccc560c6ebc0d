//! Application layer for conductor
//!
//! Use cases (executor loop, planner, synthesizer, orchestrator) and the
//! ports they depend on. Adapters for the ports live in the
//! infrastructure layer.

pub mod executor;
pub mod orchestrator;
pub mod planner;
pub mod ports;
pub mod synthesizer;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main use cases and ports
pub use executor::{DEFAULT_MAX_ITERATIONS, ExecutorAgent};
pub use orchestrator::{OrchestrationError, OrchestrationOutcome, Orchestrator};
pub use planner::Planner;
pub use ports::gateway::{ChatGateway, GatewayError, ResponseFormat};
pub use ports::tool_executor::{NoTools, ToolExecutorPort};
pub use synthesizer::Synthesizer;
