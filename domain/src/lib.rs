//! Domain layer for conductor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation Channel
//!
//! An append-only log of role-tagged turns ([`Turn`]) that forms the exact
//! context sent to the model backend. Each executor agent owns one channel,
//! unless a shared channel is injected deliberately.
//!
//! ## Plan
//!
//! The ordered decomposition of a user request into specialist-agent
//! invocations ([`PlanStep`]), produced once per run by the planner and
//! immutable afterwards.
//!
//! ## Agent Catalog
//!
//! One structure serving both planner prompt-building and step dispatch,
//! so the two can never drift apart.

pub mod catalog;
pub mod conversation;
pub mod plan;
pub mod prompt;
pub mod tool;
pub mod trace;

// Re-export commonly used types
pub use catalog::{AgentCatalog, AgentDescriptor, AgentProfile};
pub use conversation::{
    channel::Channel,
    entities::{Role, ToolCall, Turn},
};
pub use plan::{
    entities::{Plan, PlanStep},
    parser::{FALLBACK_NOTES, fallback_plan, parse_plan_reply},
};
pub use prompt::{SYNTHESIZER_PROMPT, planner_prompt, tool_agent_prompt};
pub use tool::{
    entities::{ToolDefinition, ToolParameter},
    value_objects::{ExecutionLogEntry, ToolInvocation},
};
pub use trace::{RunTrace, StepRecord, render_mermaid};
