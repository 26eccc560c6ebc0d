//! Shared mocks for application-layer tests

use crate::ports::gateway::{ChatGateway, GatewayError, ResponseFormat};
use crate::ports::tool_executor::ToolExecutorPort;
use async_trait::async_trait;
use conductor_domain::{ToolDefinition, ToolInvocation, ToolParameter, Turn};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gateway returning a fixed script of replies.
///
/// Captures every request (turn snapshot and response format) for
/// assertions. When the script is exhausted the last reply repeats, which
/// lets tests model a backend that never stops requesting tools.
pub struct ScriptedGateway {
    replies: Vec<Turn>,
    repeat_last: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<Vec<Turn>>>,
    formats: Mutex<Vec<Option<ResponseFormat>>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Turn>) -> Self {
        Self {
            replies,
            repeat_last: false,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            formats: Mutex::new(Vec::new()),
        }
    }

    /// Gateway that returns the same reply on every call
    pub fn repeating(reply: Turn) -> Self {
        let mut gateway = Self::new(vec![reply]);
        gateway.repeat_last = true;
        gateway
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Turn snapshot sent with the n-th request (0-based)
    pub fn request_snapshot(&self, n: usize) -> Vec<Turn> {
        self.requests.lock().unwrap()[n].clone()
    }

    pub fn format_of_request(&self, n: usize) -> Option<ResponseFormat> {
        self.formats.lock().unwrap()[n]
    }
}

#[async_trait]
impl ChatGateway for ScriptedGateway {
    async fn complete(
        &self,
        turns: &[Turn],
        _tools: &[ToolDefinition],
        response_format: Option<ResponseFormat>,
    ) -> Result<Turn, GatewayError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(turns.to_vec());
        self.formats.lock().unwrap().push(response_format);

        match self.replies.get(index) {
            Some(reply) => Ok(reply.clone()),
            None if self.repeat_last => Ok(self
                .replies
                .last()
                .cloned()
                .ok_or_else(|| GatewayError::MalformedReply("empty script".to_string()))?),
            None => Err(GatewayError::MalformedReply(
                "scripted gateway exhausted".to_string(),
            )),
        }
    }
}

/// Gateway that fails every request with a connection error
pub struct FailingGateway;

#[async_trait]
impl ChatGateway for FailingGateway {
    async fn complete(
        &self,
        _turns: &[Turn],
        _tools: &[ToolDefinition],
        _response_format: Option<ResponseFormat>,
    ) -> Result<Turn, GatewayError> {
        Err(GatewayError::Connection("backend unreachable".to_string()))
    }
}

/// In-memory tool executor with a small arithmetic tool set
pub struct StaticTools {
    declarations: Vec<ToolDefinition>,
}

impl Default for StaticTools {
    fn default() -> Self {
        Self {
            declarations: vec![
                ToolDefinition::new("add", "Add two numbers")
                    .with_parameter(ToolParameter::new("a", "First operand", true).with_type("number"))
                    .with_parameter(ToolParameter::new("b", "Second operand", true).with_type("number")),
                ToolDefinition::new("divide", "Divide a by b")
                    .with_parameter(ToolParameter::new("a", "Dividend", true).with_type("number"))
                    .with_parameter(ToolParameter::new("b", "Divisor", true).with_type("number")),
                ToolDefinition::new("get_weather", "Get the current weather for a location")
                    .with_parameter(ToolParameter::new("location", "City name", true)),
            ],
        }
    }
}

#[async_trait]
impl ToolExecutorPort for StaticTools {
    fn declarations(&self) -> &[ToolDefinition] {
        &self.declarations
    }

    async fn execute(&self, invocation: &ToolInvocation) -> String {
        match invocation.name.as_str() {
            "add" => match (invocation.require_f64("a"), invocation.require_f64("b")) {
                (Ok(a), Ok(b)) => format!("{}", a + b),
                (Err(e), _) | (_, Err(e)) => format!("Error invoking 'add': {e}"),
            },
            "divide" => match (invocation.require_f64("a"), invocation.require_f64("b")) {
                (Ok(_), Ok(b)) if b == 0.0 => {
                    "Error: cannot divide by zero.".to_string()
                }
                (Ok(a), Ok(b)) => format!("{}", a / b),
                (Err(e), _) | (_, Err(e)) => format!("Error invoking 'divide': {e}"),
            },
            "get_weather" => match invocation.require_string("location") {
                Ok(location) => format!("{location}: sunny, 25C"),
                Err(e) => format!("Error invoking 'get_weather': {e}"),
            },
            other => format!("Error: unknown tool '{other}'."),
        }
    }
}
