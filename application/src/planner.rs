//! Planner - decomposes a request into an ordered plan of agent steps.
//!
//! A non-tool-using agent specialization: one gateway call constrained to
//! JSON output, a tolerant parse, and a deterministic keyword fallback when
//! parsing fails. Planning never fails outright - an empty plan is a
//! legitimate "no agent applies" outcome. Only transport failures
//! propagate.

use crate::ports::gateway::{ChatGateway, GatewayError, ResponseFormat};
use conductor_domain::{AgentCatalog, Channel, Plan, fallback_plan, parse_plan_reply, planner_prompt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Produces the [`Plan`] for one orchestration run.
///
/// The system prompt is built from the catalog at construction time, one
/// line per agent; the synthesizer is never part of the catalog and is
/// explicitly excluded by the prompt.
pub struct Planner {
    gateway: Arc<dyn ChatGateway>,
    catalog: Arc<AgentCatalog>,
    channel: Channel,
}

impl Planner {
    pub fn new(gateway: Arc<dyn ChatGateway>, catalog: Arc<AgentCatalog>) -> Self {
        let channel = Channel::with_system(planner_prompt(catalog.descriptors()));
        Self {
            gateway,
            catalog,
            channel,
        }
    }

    pub async fn plan(&mut self, user_input: &str) -> Result<Plan, GatewayError> {
        self.channel.push_user(user_input);

        let reply = self
            .gateway
            .complete(
                self.channel.turns(),
                &[],
                Some(ResponseFormat::JsonObject),
            )
            .await?;

        let content = reply.text_content();
        debug!("[PlannerAgent] reply: {}", content);

        match parse_plan_reply(content) {
            Some(plan) => Ok(plan),
            None => {
                warn!("[PlannerAgent] could not parse plan JSON, falling back");
                Ok(fallback_plan(user_input, &self.catalog))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGateway;
    use conductor_domain::{AgentProfile, FALLBACK_NOTES, Role, Turn};

    fn weather_catalog() -> Arc<AgentCatalog> {
        Arc::new(
            AgentCatalog::new()
                .register(
                    AgentProfile::new(
                        "WeatherAgent",
                        "Fetches current weather information for a specified location.",
                        "You are WeatherAgent.",
                    )
                    .with_tools(["get_weather"])
                    .with_keywords(["weather", "temperature", "forecast"]),
                )
                .register(
                    AgentProfile::new(
                        "LocationAgent",
                        "Provides summarized information about a specified location.",
                        "You are LocationAgent.",
                    )
                    .with_tools(["search_location_info"])
                    .with_keywords(["info", "information", "about", "where is"]),
                ),
        )
    }

    #[tokio::test]
    async fn test_plan_parses_structured_reply() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Turn::assistant(
            r#"{"plan": [{"agent": "WeatherAgent", "input": "weather in Hanoi"}], "notes": "one lookup"}"#,
        )]));
        let mut planner = Planner::new(gateway.clone(), weather_catalog());

        let plan = planner.plan("What's the weather in Hanoi?").await.unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.steps[0].agent, "WeatherAgent");
        assert_eq!(plan.notes, "one lookup");

        // The request was constrained to JSON output and carried no tools
        assert_eq!(
            gateway.format_of_request(0),
            Some(ResponseFormat::JsonObject)
        );
    }

    #[tokio::test]
    async fn test_plan_prompt_names_catalog_agents() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Turn::assistant(
            r#"{"plan": [], "notes": "none"}"#,
        )]));
        let mut planner = Planner::new(gateway.clone(), weather_catalog());
        planner.plan("anything").await.unwrap();

        let turns = gateway.request_snapshot(0);
        let system = turns.iter().find(|t| t.role == Role::System).unwrap();
        assert!(system.text_content().contains("- WeatherAgent:"));
        assert!(system.text_content().contains("- LocationAgent:"));
    }

    #[tokio::test]
    async fn test_unparseable_reply_falls_back_deterministically() {
        let make_planner = || Planner::new(
            Arc::new(ScriptedGateway::new(vec![Turn::assistant(
                "Sure! I would suggest checking the weather first.",
            )])),
            weather_catalog(),
        );

        let input = "What's the weather in Hanoi?";
        let first = make_planner().plan(input).await.unwrap();
        let second = make_planner().plan(input).await.unwrap();

        assert_eq!(first.notes, FALLBACK_NOTES);
        assert_eq!(first.len(), 1);
        assert_eq!(first.steps[0].agent, "WeatherAgent");
        assert_eq!(first.steps, second.steps);
    }

    #[tokio::test]
    async fn test_fallback_with_no_keywords_yields_empty_plan() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Turn::assistant("no json here")]));
        let mut planner = Planner::new(gateway, weather_catalog());

        let plan = planner.plan("Recite a poem").await.unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.notes, FALLBACK_NOTES);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let mut planner = Planner::new(
            Arc::new(crate::test_support::FailingGateway),
            weather_catalog(),
        );
        let result = planner.plan("weather?").await;
        assert!(matches!(result, Err(GatewayError::Connection(_))));
    }

    #[tokio::test]
    async fn test_weather_scenario_single_step() {
        // Catalog [WeatherAgent, LocationAgent], input about weather only:
        // the only step must target WeatherAgent (here via fallback, which
        // is the deterministic path).
        let gateway = Arc::new(ScriptedGateway::new(vec![Turn::assistant("not json")]));
        let mut planner = Planner::new(gateway, weather_catalog());

        let plan = planner.plan("What's the weather in Hanoi?").await.unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.steps[0].agent, "WeatherAgent");
    }
}
