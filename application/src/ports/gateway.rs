//! Model Gateway port
//!
//! Defines the single chokepoint through which the application layer talks
//! to the model backend. Implementations (adapters) live in the
//! infrastructure layer.

use async_trait::async_trait;
use conductor_domain::{ToolDefinition, Turn};
use thiserror::Error;

/// Errors surfaced by the model gateway.
///
/// The gateway never retries internally - retry policy belongs to the
/// caller. All of these are fatal to the current orchestration run.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    #[error("Request timed out")]
    Timeout,
}

/// Structured-output constraint advertised with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// OpenAI-style `{"type": "json_object"}`
    JsonObject,
}

/// Gateway to the model backend.
///
/// Takes the full ordered turn sequence plus the tool declarations to
/// advertise, and normalizes the backend reply into one assistant [`Turn`]
/// which may carry content, tool calls, or both.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn complete(
        &self,
        turns: &[Turn],
        tools: &[ToolDefinition],
        response_format: Option<ResponseFormat>,
    ) -> Result<Turn, GatewayError>;
}
