//! Executor Agent - the bounded request/act loop.
//!
//! Wraps a conversation channel, a subset of the tool registry, and the
//! model gateway into the core state machine: request the model, execute
//! any tool calls it issues, feed the results back, and repeat until the
//! model stops requesting tools or the iteration budget runs out.
//!
//! The hard invariant of this loop is that a single tool or parse failure
//! never crashes the pipeline: every failure at the tool boundary degrades
//! to a string result fed back to the model. Only gateway (transport)
//! failures propagate.

use crate::ports::gateway::{ChatGateway, GatewayError, ResponseFormat};
use crate::ports::tool_executor::{NoTools, ToolExecutorPort};
use conductor_domain::{AgentProfile, Channel, ExecutionLogEntry, ToolDefinition, ToolInvocation};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Default bound on tool round-trips per run
pub const DEFAULT_MAX_ITERATIONS: usize = 3;

/// An agent that may call tools in a bounded request/act loop.
///
/// Each instance exclusively owns its conversation channel. To let an
/// agent see prior turns deliberately (shared-memory mode), inject an
/// existing channel with [`ExecutorAgent::with_channel`] and take it back
/// with [`ExecutorAgent::into_channel`] afterwards - ownership transfer
/// keeps all writers serialized.
pub struct ExecutorAgent {
    name: String,
    gateway: Arc<dyn ChatGateway>,
    tools: Arc<dyn ToolExecutorPort>,
    /// Advertised subset of the registry; empty means no tools
    tool_names: Vec<String>,
    channel: Channel,
    max_iterations: usize,
    execution_log: Vec<ExecutionLogEntry>,
}

impl ExecutorAgent {
    pub fn new(
        name: impl Into<String>,
        system_prompt: impl Into<String>,
        gateway: Arc<dyn ChatGateway>,
        tools: Arc<dyn ToolExecutorPort>,
    ) -> Self {
        Self {
            name: name.into(),
            gateway,
            tools,
            tool_names: Vec::new(),
            channel: Channel::with_system(system_prompt),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            execution_log: Vec::new(),
        }
    }

    /// Agent with no tool access (planner, synthesizer)
    pub fn without_tools(
        name: impl Into<String>,
        system_prompt: impl Into<String>,
        gateway: Arc<dyn ChatGateway>,
    ) -> Self {
        Self::new(name, system_prompt, gateway, Arc::new(NoTools))
    }

    /// Instantiate an executor from a catalog profile
    pub fn from_profile(
        profile: &AgentProfile,
        gateway: Arc<dyn ChatGateway>,
        tools: Arc<dyn ToolExecutorPort>,
    ) -> Self {
        Self::new(profile.name(), profile.system_prompt.clone(), gateway, tools)
            .with_tool_names(profile.tool_names.clone())
    }

    pub fn with_tool_names(mut self, tool_names: Vec<String>) -> Self {
        self.tool_names = tool_names;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Inject an existing channel (shared-memory mode).
    ///
    /// This agent's system prompt is ensured on the channel, which is a
    /// no-op when the channel already carries one.
    pub fn with_channel(mut self, mut channel: Channel) -> Self {
        if let Some(prompt) = self
            .channel
            .turns()
            .first()
            .and_then(|t| t.content.clone())
        {
            channel.ensure_system(prompt);
        }
        self.channel = channel;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Give the channel back after a shared-memory run
    pub fn into_channel(self) -> Channel {
        self.channel
    }

    pub fn execution_log(&self) -> &[ExecutionLogEntry] {
        &self.execution_log
    }

    /// Drain the execution log (one entry per tool invocation, call order)
    pub fn take_execution_log(&mut self) -> Vec<ExecutionLogEntry> {
        std::mem::take(&mut self.execution_log)
    }

    /// Run the bounded request/act loop for one user input.
    ///
    /// Returns the model's final content, possibly empty. Exhausting the
    /// iteration budget is a soft stop, not an error: the last available
    /// content is returned regardless of pending tool calls.
    pub async fn run(&mut self, user_input: &str) -> Result<String, GatewayError> {
        self.run_with_format(user_input, None).await
    }

    /// As [`run`](Self::run), with an optional structured-output
    /// constraint on the gateway requests (used by the planner).
    pub async fn run_with_format(
        &mut self,
        user_input: &str,
        response_format: Option<ResponseFormat>,
    ) -> Result<String, GatewayError> {
        info!("[{}] input: {}", self.name, user_input);
        self.channel.push_user(user_input);

        let advertised = self.advertised_tools();

        let mut reply = self
            .gateway
            .complete(self.channel.turns(), &advertised, response_format)
            .await?;

        let mut loops = 0;
        loop {
            loops += 1;

            if !reply.has_tool_calls() {
                let content = reply.text_content().to_string();
                if !content.is_empty() {
                    self.channel.push_assistant(content.clone());
                    info!("[{}] output: {}", self.name, content);
                }
                return Ok(content);
            }

            let calls = reply.tool_calls.clone();
            self.channel.push_assistant_tool_calls(calls.clone());

            for call in &calls {
                let call_id = if call.id.is_empty() {
                    synthesize_call_id()
                } else {
                    call.id.clone()
                };

                let (invocation, decode_error) =
                    ToolInvocation::from_raw(&call.name, &call.arguments);
                if let Some(error) = decode_error {
                    warn!(
                        "[{}] invalid arguments for {}: {}",
                        self.name, call.name, error
                    );
                }

                debug!(
                    "[{}] tool call: {}({:?})",
                    self.name, invocation.name, invocation.arguments
                );

                let result = if self.tools.has_tool(&invocation.name) {
                    self.tools.execute(&invocation).await
                } else {
                    format!("Error: unknown tool '{}'.", invocation.name)
                };

                self.channel
                    .push_tool_result(call_id, &call.name, &result);
                self.execution_log
                    .push(ExecutionLogEntry::new(&invocation, &result));
                info!("[{}] tool result: {}", self.name, result);
            }

            reply = self
                .gateway
                .complete(self.channel.turns(), &advertised, response_format)
                .await?;

            if loops >= self.max_iterations {
                warn!("[{}] max tool iterations reached", self.name);
                let content = reply.text_content().to_string();
                if !content.is_empty() {
                    self.channel.push_assistant(content.clone());
                }
                return Ok(content);
            }
        }
    }

    fn advertised_tools(&self) -> Vec<ToolDefinition> {
        if self.tool_names.is_empty() {
            return Vec::new();
        }
        self.tools
            .declarations()
            .iter()
            .filter(|d| self.tool_names.iter().any(|n| n == &d.name))
            .cloned()
            .collect()
    }
}

/// Fresh unique id for a tool call the backend left unidentified
fn synthesize_call_id() -> String {
    format!("call_{}", &uuid::Uuid::new_v4().simple().to_string()[..8])
}
