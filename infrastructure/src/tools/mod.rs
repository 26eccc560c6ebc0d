//! Built-in tool implementations and the registry dispatching to them.
//!
//! Every tool returns a plain string. Failures are reported inside that
//! string rather than as errors, so a broken lookup degrades the
//! conversation instead of aborting the run.

pub mod health;
pub mod location;
pub mod math;
pub mod news;
pub mod registry;
pub mod schema;
pub mod weather;
pub mod web;

pub use registry::ToolRegistry;

/// User-Agent sent with outbound tool requests. Wikipedia and Nominatim
/// reject requests without one.
pub(crate) const TOOL_USER_AGENT: &str = "conductor/0.1 (agent tool)";
