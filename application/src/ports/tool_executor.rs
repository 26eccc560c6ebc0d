//! Tool Executor port
//!
//! Defines how the application layer dispatches tool invocations. The
//! contract at this boundary is that execution always derives a string:
//! any underlying failure is converted into an error string by the
//! implementation, never raised.

use async_trait::async_trait;
use conductor_domain::{ToolDefinition, ToolInvocation};

/// Port for tool dispatch
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Declarations for every registered tool
    fn declarations(&self) -> &[ToolDefinition];

    /// Check if a tool is registered
    fn has_tool(&self, name: &str) -> bool {
        self.declarations().iter().any(|d| d.name == name)
    }

    /// Execute a tool invocation, always producing a textual result
    async fn execute(&self, invocation: &ToolInvocation) -> String;
}

/// Executor with no tools, for agents that never call any
/// (planner, synthesizer).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTools;

#[async_trait]
impl ToolExecutorPort for NoTools {
    fn declarations(&self) -> &[ToolDefinition] {
        &[]
    }

    async fn execute(&self, invocation: &ToolInvocation) -> String {
        format!("Error: unknown tool '{}'.", invocation.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_tools_has_nothing() {
        let tools = NoTools;
        assert!(tools.declarations().is_empty());
        assert!(!tools.has_tool("get_weather"));

        let result = tools.execute(&ToolInvocation::new("get_weather")).await;
        assert!(result.starts_with("Error: unknown tool"));
    }
}
