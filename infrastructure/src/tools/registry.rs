//! Built-in tool registry

use super::{health, location, math, news, weather, web};
use crate::config::FileConfig;
use async_trait::async_trait;
use conductor_application::ToolExecutorPort;
use conductor_domain::{ToolDefinition, ToolInvocation};
use std::time::Duration;
use tracing::info;

/// Registry over all built-in tools, sharing one HTTP client.
///
/// Declarations are fixed at construction; agents advertise subsets of
/// them by name. Dispatch is by tool name, and an unknown name degrades
/// to an error string fed back to the model.
pub struct ToolRegistry {
    client: reqwest::Client,
    news_api_key: Option<String>,
    declarations: Vec<ToolDefinition>,
}

impl ToolRegistry {
    pub fn new(client: reqwest::Client, news_api_key: Option<String>) -> Self {
        let mut declarations = vec![
            weather::definition(),
            location::definition(),
            web::definition(),
        ];
        declarations.extend(news::definitions());
        declarations.extend(health::definitions());
        declarations.extend(math::definitions());

        Self {
            client,
            news_api_key,
            declarations,
        }
    }

    /// Build a registry with a client honoring the configured timeout.
    pub fn from_config(config: &FileConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::new(client, config.news_api_key.clone()))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new(reqwest::Client::new(), None)
    }
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn declarations(&self) -> &[ToolDefinition] {
        &self.declarations
    }

    async fn execute(&self, invocation: &ToolInvocation) -> String {
        info!(
            "tool call: {}({})",
            invocation.name,
            serde_json::Value::Object(invocation.arguments.clone())
        );

        let result = match invocation.name.as_str() {
            weather::GET_WEATHER => weather::execute(&self.client, invocation).await,
            location::SEARCH_LOCATION_INFO => location::execute(&self.client, invocation).await,
            news::GET_TOP_HEADLINES => {
                news::top_headlines(&self.client, self.news_api_key.as_deref()).await
            }
            news::SEARCH_NEWS_ARTICLES => {
                news::search_articles(&self.client, self.news_api_key.as_deref(), invocation).await
            }
            news::GET_NEWS_SOURCE_INFO => news::source_info(&self.client, invocation).await,
            web::FETCH_WEBPAGE_SUMMARY => web::execute(&self.client, invocation).await,
            health::GET_NUTRITION_INFO => health::nutrition_info(&self.client, invocation).await,
            health::CHECK_SYMPTOM => health::check_symptom(invocation).await,
            health::FIND_LOCAL_CLINICS => {
                health::find_local_clinics(&self.client, invocation).await
            }
            math::ADD_NUMBERS
            | math::SUBTRACT_NUMBERS
            | math::MULTIPLY_NUMBERS
            | math::DIVIDE_NUMBERS => math::execute(invocation),
            other => format!("Error: unknown tool '{other}'."),
        };

        info!("tool result: {result}");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_declares_all_builtins() {
        let registry = ToolRegistry::default();
        let names: Vec<&str> = registry
            .declarations()
            .iter()
            .map(|d| d.name.as_str())
            .collect();

        for expected in [
            weather::GET_WEATHER,
            location::SEARCH_LOCATION_INFO,
            news::GET_TOP_HEADLINES,
            news::SEARCH_NEWS_ARTICLES,
            news::GET_NEWS_SOURCE_INFO,
            web::FETCH_WEBPAGE_SUMMARY,
            health::GET_NUTRITION_INFO,
            health::CHECK_SYMPTOM,
            health::FIND_LOCAL_CLINICS,
            math::ADD_NUMBERS,
            math::SUBTRACT_NUMBERS,
            math::MULTIPLY_NUMBERS,
            math::DIVIDE_NUMBERS,
        ] {
            assert!(names.contains(&expected), "missing {expected}");
            assert!(registry.has_tool(expected));
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_degrades_to_error_string() {
        let registry = ToolRegistry::default();
        let result = registry.execute(&ToolInvocation::new("launch_rocket")).await;
        assert_eq!(result, "Error: unknown tool 'launch_rocket'.");
    }

    #[tokio::test]
    async fn test_math_dispatch() {
        let registry = ToolRegistry::default();
        let invocation = ToolInvocation::new(math::ADD_NUMBERS)
            .with_arg("a", 1)
            .with_arg("b", 2);
        assert_eq!(
            registry.execute(&invocation).await,
            "The sum of 1 and 2 is 3"
        );
    }
}
