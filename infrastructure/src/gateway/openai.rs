//! OpenAI-compatible chat-completions gateway.
//!
//! Speaks the `POST {base_url}/chat/completions` wire format with bearer
//! authentication. Works against any backend exposing that endpoint
//! (OpenAI, vLLM, Ollama, LM Studio and the like). One `reqwest::Client`
//! is built per gateway and reused for every request; the request timeout
//! is applied per call by the client.

use crate::config::FileConfig;
use crate::tools::schema::function_schema;
use async_trait::async_trait;
use conductor_application::{ChatGateway, GatewayError, ResponseFormat};
use conductor_domain::{Role, ToolCall, ToolDefinition, Turn};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Chat-completions adapter for OpenAI-compatible backends
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiGateway {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        Self::with_options(base_url, api_key, model, 0.2, Duration::from_secs(120))
    }

    pub fn with_options(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
        })
    }

    pub fn from_config(config: &FileConfig) -> Result<Self, GatewayError> {
        Self::with_options(
            config.base_url.clone(),
            config.api_key.clone().unwrap_or_default(),
            config.model.clone(),
            config.temperature,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatGateway for OpenAiGateway {
    async fn complete(
        &self,
        turns: &[Turn],
        tools: &[ToolDefinition],
        response_format: Option<ResponseFormat>,
    ) -> Result<Turn, GatewayError> {
        let request = ChatRequest {
            model: &self.model,
            messages: wire_messages(turns),
            temperature: self.temperature,
            tools: if tools.is_empty() {
                None
            } else {
                Some(tools.iter().map(function_schema).collect())
            },
            tool_choice: if tools.is_empty() { None } else { Some("auto") },
            response_format: response_format.map(|f| match f {
                ResponseFormat::JsonObject => serde_json::json!({"type": "json_object"}),
            }),
        };

        debug!(
            "gateway request: model={} messages={} tools={}",
            self.model,
            turns.len(),
            tools.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedReply(e.to_string()))?;

        let choice = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::MalformedReply("no choices in reply".to_string()))?;

        Ok(turn_from_message(choice.message))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<WireToolCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireToolCall {
    #[serde(default)]
    id: String,
    #[serde(rename = "type", default = "function_kind")]
    kind: String,
    function: WireFunction,
}

fn function_kind() -> String {
    "function".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
struct WireFunction {
    name: String,
    #[serde(default)]
    arguments: serde_json::Value,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: WireMessage,
}

fn wire_messages(turns: &[Turn]) -> Vec<WireMessage> {
    turns
        .iter()
        .map(|turn| WireMessage {
            role: turn.role.as_str().to_string(),
            content: turn.content.clone(),
            tool_calls: turn.tool_calls.iter().map(wire_tool_call).collect(),
            tool_call_id: turn.tool_call_id.clone(),
            name: turn.tool_name.clone(),
        })
        .collect()
}

fn wire_tool_call(call: &ToolCall) -> WireToolCall {
    // The wire format expects arguments as a JSON-encoded string
    let arguments = match &call.arguments {
        serde_json::Value::String(_) => call.arguments.clone(),
        other => serde_json::Value::String(other.to_string()),
    };
    WireToolCall {
        id: call.id.clone(),
        kind: "function".to_string(),
        function: WireFunction {
            name: call.name.clone(),
            arguments,
        },
    }
}

/// Normalize a backend reply message into an assistant turn.
///
/// The backend may send content, tool calls, or both; the role field is
/// trusted to be `assistant` and not inspected further.
fn turn_from_message(message: WireMessage) -> Turn {
    Turn {
        role: Role::Assistant,
        content: message.content,
        tool_calls: message
            .tool_calls
            .into_iter()
            .map(|c| ToolCall::new(c.id, c.function.name, c.function.arguments))
            .collect(),
        tool_call_id: None,
        tool_name: None,
    }
}
