//! Synthesizer - composes intermediate outputs into one final answer.
//!
//! A non-tool-using agent specialization. Never fails to produce *some*
//! string: an empty model reply is returned as-is, and an empty output
//! list still produces a request the model can answer.

use crate::executor::ExecutorAgent;
use crate::ports::gateway::{ChatGateway, GatewayError};
use conductor_domain::{SYNTHESIZER_PROMPT, StepRecord};
use std::sync::Arc;

pub struct Synthesizer {
    agent: ExecutorAgent,
}

impl Synthesizer {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            agent: ExecutorAgent::without_tools("SynthesizerAgent", SYNTHESIZER_PROMPT, gateway),
        }
    }

    /// Compose the final answer from the original request and the collected
    /// step outputs, in step order.
    pub async fn synthesize(
        &mut self,
        user_input: &str,
        outputs: &[StepRecord],
    ) -> Result<String, GatewayError> {
        let mut parts = vec![format!("User request: {user_input}"), "Agent outputs:".to_string()];
        for record in outputs {
            parts.push(format!("- {}: {}", record.agent, record.output));
        }
        parts.push("Compose a concise final answer for the user.".to_string());

        self.agent.run(&parts.join("\n")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGateway;
    use conductor_domain::{Role, Turn};

    fn record(index: usize, agent: &str, output: &str) -> StepRecord {
        StepRecord {
            index,
            agent: agent.to_string(),
            input: String::new(),
            output: output.to_string(),
            tool_calls: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_synthesize_enumerates_outputs_in_order() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Turn::assistant(
            "Hanoi is warm and rainy.",
        )]));
        let mut synthesizer = Synthesizer::new(gateway.clone());

        let outputs = vec![
            record(0, "WeatherAgent", "Hanoi: 31C"),
            record(1, "LocationAgent", "Hanoi is the capital of Vietnam."),
        ];
        let answer = synthesizer
            .synthesize("Tell me about Hanoi weather", &outputs)
            .await
            .unwrap();
        assert_eq!(answer, "Hanoi is warm and rainy.");

        let turns = gateway.request_snapshot(0);
        let user = turns.iter().find(|t| t.role == Role::User).unwrap();
        let prompt = user.text_content();
        assert!(prompt.contains("User request: Tell me about Hanoi weather"));
        let weather_pos = prompt.find("- WeatherAgent: Hanoi: 31C").unwrap();
        let location_pos = prompt.find("- LocationAgent:").unwrap();
        assert!(weather_pos < location_pos);
    }

    #[tokio::test]
    async fn test_synthesize_with_empty_outputs_still_answers() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Turn::assistant(
            "I could not find an agent for that request.",
        )]));
        let mut synthesizer = Synthesizer::new(gateway);

        let answer = synthesizer.synthesize("Recite a poem", &[]).await.unwrap();
        assert!(!answer.is_empty());
    }

    #[tokio::test]
    async fn test_empty_model_reply_returned_as_is() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Turn::assistant("")]));
        let mut synthesizer = Synthesizer::new(gateway);
        let answer = synthesizer.synthesize("anything", &[]).await.unwrap();
        assert_eq!(answer, "");
    }
}
