//! Configuration file schema

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration, merged from defaults, config files and
/// `CONDUCTOR_`-prefixed environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// API key sent as the bearer token. Optional: local backends such as
    /// Ollama accept any value.
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible backend, without the
    /// `/chat/completions` suffix
    pub base_url: String,

    /// Model identifier passed through to the backend
    pub model: String,

    /// Sampling temperature for every request
    pub temperature: f32,

    /// Per-request HTTP timeout in seconds
    pub request_timeout_secs: u64,

    /// Iteration budget for each agent's tool loop
    pub max_tool_iterations: usize,

    /// NewsAPI key; without it the news tools fall back to keyless sources
    pub news_api_key: Option<String>,

    /// Directory run traces are exported into
    pub trace_dir: PathBuf,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            request_timeout_secs: 120,
            max_tool_iterations: 3,
            news_api_key: None,
            trace_dir: PathBuf::from("trace_logs"),
        }
    }
}
