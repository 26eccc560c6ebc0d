//! Plan parsing from model replies, with a deterministic fallback.
//!
//! The planner instructs the model to emit strict JSON, but replies arrive
//! wrapped in prose or markdown often enough that parsing slices the reply
//! from the first `{` to the last `}` before decoding. When no plan can be
//! decoded at all, [`fallback_plan`] produces one from keyword presence -
//! a pure function of the input and the catalog, so the same unparseable
//! reply always yields the same plan.

use crate::catalog::AgentCatalog;
use crate::plan::entities::{Plan, PlanStep};
use serde::Deserialize;

/// Notes string stamped on every fallback plan
pub const FALLBACK_NOTES: &str = "fallback plan";

/// Wire shape of the planner reply (the step list arrives as `plan`)
#[derive(Debug, Deserialize)]
struct PlanReply {
    #[serde(default)]
    reasoning: Option<String>,
    #[serde(default)]
    plan: Vec<PlanStep>,
    #[serde(default)]
    notes: String,
}

/// Parse a plan from planner reply content.
///
/// Returns `None` when no JSON object can be extracted or decoded; the
/// caller is expected to fall back to [`fallback_plan`].
pub fn parse_plan_reply(content: &str) -> Option<Plan> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }

    let reply: PlanReply = serde_json::from_str(&content[start..=end]).ok()?;

    let mut plan = Plan::new(reply.plan, reply.notes);
    if let Some(reasoning) = reply.reasoning {
        plan.reasoning = Some(reasoning);
    }
    Some(plan)
}

/// Build a deterministic keyword-match plan over the lowercased request.
///
/// Catalog order decides step order; each agent whose keywords match
/// contributes exactly one step carrying the full user input. May produce
/// an empty plan - that is a legitimate "no agent applies" outcome.
pub fn fallback_plan(user_input: &str, catalog: &AgentCatalog) -> Plan {
    let lowered = user_input.to_lowercase();

    let steps: Vec<PlanStep> = catalog
        .profiles()
        .filter(|profile| {
            profile
                .keywords
                .iter()
                .any(|keyword| lowered.contains(keyword.as_str()))
        })
        .map(|profile| PlanStep::new(profile.descriptor.name.clone(), user_input))
        .collect();

    Plan::new(steps, FALLBACK_NOTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AgentCatalog, AgentProfile};

    fn test_catalog() -> AgentCatalog {
        AgentCatalog::new()
            .register(
                AgentProfile::new(
                    "WeatherAgent",
                    "Fetches current weather information for a specified location.",
                    "You are WeatherAgent.",
                )
                .with_keywords(["weather", "temperature", "forecast"]),
            )
            .register(
                AgentProfile::new(
                    "LocationAgent",
                    "Provides summarized information about a specified location.",
                    "You are LocationAgent.",
                )
                .with_keywords(["info", "information", "about", "where is"]),
            )
    }

    #[test]
    fn test_parse_plan_reply_strict_json() {
        let content = r#"{"plan": [{"agent": "WeatherAgent", "input": "weather in Hanoi"}], "notes": "single lookup"}"#;
        let plan = parse_plan_reply(content).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.steps[0].agent, "WeatherAgent");
        assert_eq!(plan.notes, "single lookup");
        assert!(plan.reasoning.is_none());
    }

    #[test]
    fn test_parse_plan_reply_wrapped_in_prose() {
        let content = "Here is the plan:\n{\"plan\": [{\"agent\": \"LocationAgent\", \"input\": \"Tokyo\"}], \"notes\": \"n\"}\nDone.";
        let plan = parse_plan_reply(content).unwrap();
        assert_eq!(plan.steps[0].agent, "LocationAgent");
    }

    #[test]
    fn test_parse_plan_reply_with_reasoning() {
        let content = r#"{"reasoning": "the user wants weather", "plan": [], "notes": "none"}"#;
        let plan = parse_plan_reply(content).unwrap();
        assert_eq!(plan.reasoning.as_deref(), Some("the user wants weather"));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_parse_plan_reply_missing_fields_default() {
        let plan = parse_plan_reply("{}").unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.notes, "");
    }

    #[test]
    fn test_parse_plan_reply_rejects_prose() {
        assert!(parse_plan_reply("I could not produce a plan.").is_none());
    }

    #[test]
    fn test_parse_plan_reply_rejects_malformed_json() {
        assert!(parse_plan_reply("{\"plan\": [").is_none());
    }

    #[test]
    fn test_fallback_plan_matches_single_agent() {
        let plan = fallback_plan("What's the weather in Hanoi?", &test_catalog());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.steps[0].agent, "WeatherAgent");
        assert_eq!(plan.steps[0].input, "What's the weather in Hanoi?");
        assert_eq!(plan.notes, FALLBACK_NOTES);
    }

    #[test]
    fn test_fallback_plan_matches_multiple_agents_in_catalog_order() {
        let plan = fallback_plan(
            "Tell me information about Beijing, also the current weather there",
            &test_catalog(),
        );
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.steps[0].agent, "WeatherAgent");
        assert_eq!(plan.steps[1].agent, "LocationAgent");
    }

    #[test]
    fn test_fallback_plan_no_match_is_empty() {
        let plan = fallback_plan("Recite a poem", &test_catalog());
        assert!(plan.is_empty());
        assert_eq!(plan.notes, FALLBACK_NOTES);
    }

    #[test]
    fn test_fallback_plan_is_deterministic() {
        let catalog = test_catalog();
        let input = "weather and information about Hanoi";
        let first = fallback_plan(input, &catalog);
        let second = fallback_plan(input, &catalog);
        assert_eq!(first.steps, second.steps);
        assert_eq!(first.notes, second.notes);
    }
}
