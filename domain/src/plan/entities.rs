//! Plan domain entities

use serde::{Deserialize, Serialize};

/// One step in a plan: invoke a catalog agent with a clean input.
///
/// Step order is significant - execution order equals list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep {
    /// Name of a catalog agent (e.g., "WeatherAgent")
    pub agent: String,
    /// Input to pass to the agent
    #[serde(default)]
    pub input: String,
}

impl PlanStep {
    pub fn new(agent: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            input: input.into(),
        }
    }
}

/// The ordered decomposition of a user request (Entity).
///
/// Produced once per orchestration run by the planner, immutable after
/// production. An empty step list is a legitimate outcome meaning
/// "no agent applies".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// The planner's thought process, when the model provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    /// Ordered steps to execute
    pub steps: Vec<PlanStep>,
    /// Short rationale from the planner
    #[serde(default)]
    pub notes: String,
}

impl Plan {
    pub fn new(steps: Vec<PlanStep>, notes: impl Into<String>) -> Self {
        Self {
            reasoning: None,
            steps,
            notes: notes.into(),
        }
    }

    pub fn empty(notes: impl Into<String>) -> Self {
        Self::new(Vec::new(), notes)
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}
