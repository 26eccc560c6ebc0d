//! Tool domain value objects
//!
//! [`ToolInvocation`] is the decoded form of a wire-level tool call: name
//! plus a structured argument map. [`ExecutionLogEntry`] records one tool
//! invocation for tracing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A decoded tool invocation ready for dispatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Name of the tool to invoke
    pub name: String,
    /// Decoded argument mapping
    pub arguments: Map<String, Value>,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Decode raw tool-call arguments into an invocation.
    ///
    /// A JSON string is decoded as an object; a structured mapping is used
    /// as-is. Anything else - including a string that fails to decode -
    /// yields empty arguments. Returns the decode error text alongside so
    /// the caller can log the degradation.
    pub fn from_raw(name: impl Into<String>, raw: &Value) -> (Self, Option<String>) {
        let name = name.into();
        match raw {
            Value::Object(map) => (
                Self {
                    name,
                    arguments: map.clone(),
                },
                None,
            ),
            Value::String(s) if s.trim().is_empty() => (Self::new(name), None),
            Value::String(s) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Object(map)) => (
                    Self {
                        name,
                        arguments: map,
                    },
                    None,
                ),
                Ok(other) => (
                    Self::new(name),
                    Some(format!("expected a JSON object, got: {other}")),
                ),
                Err(e) => (Self::new(name), Some(e.to_string())),
            },
            Value::Null => (Self::new(name), None),
            other => (
                Self::new(name),
                Some(format!("unsupported arguments payload: {other}")),
            ),
        }
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {key}"))
    }

    /// Get a numeric argument, accepting numbers and numeric strings
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.arguments.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Get a required numeric argument or return an error message
    pub fn require_f64(&self, key: &str) -> Result<f64, String> {
        self.get_f64(key)
            .ok_or_else(|| format!("Missing or non-numeric argument: {key}"))
    }
}

/// Record of one tool invocation, surfaced to the orchestrator for tracing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionLogEntry {
    pub tool_name: String,
    pub arguments: Map<String, Value>,
    pub result: String,
}

impl ExecutionLogEntry {
    pub fn new(invocation: &ToolInvocation, result: impl Into<String>) -> Self {
        Self {
            tool_name: invocation.name.clone(),
            arguments: invocation.arguments.clone(),
            result: result.into(),
        }
    }
}
