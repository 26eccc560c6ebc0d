//! Plan domain module
//!
//! The ordered decomposition of a user request into agent invocations,
//! plus the tolerant parser and the deterministic fallback.

pub mod entities;
pub mod parser;

pub use entities::{Plan, PlanStep};
pub use parser::{FALLBACK_NOTES, fallback_plan, parse_plan_reply};
