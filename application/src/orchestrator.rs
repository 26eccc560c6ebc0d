//! Orchestrator - drives the planner -> executor-loop -> synthesizer
//! pipeline for one user request.
//!
//! Steps run strictly sequentially, in plan order. Unknown plan agents are
//! skipped with a recorded warning; step outputs are recorded per step
//! index and agent name, so a duplicate agent appends a second record
//! instead of overwriting the first. Only gateway (transport) failures
//! abort a run.

use crate::executor::{DEFAULT_MAX_ITERATIONS, ExecutorAgent};
use crate::planner::Planner;
use crate::ports::gateway::{ChatGateway, GatewayError};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::synthesizer::Synthesizer;
use conductor_domain::{AgentCatalog, RunTrace, StepRecord};
use std::sync::Arc;
use tracing::{info, warn};

/// Errors escaping an orchestration run
#[derive(thiserror::Error, Debug)]
pub enum OrchestrationError {
    #[error("model gateway failure: {0}")]
    Gateway(#[from] GatewayError),
}

/// Result of one orchestration run: the answer plus the structured trace
#[derive(Debug, Clone)]
pub struct OrchestrationOutcome {
    pub final_answer: String,
    pub trace: RunTrace,
}

/// Drives the full pipeline over an immutable catalog and shared adapters.
///
/// The gateway and tool registry are stateless and reused across agents;
/// each plan step gets a fresh executor agent owning its own channel.
pub struct Orchestrator {
    gateway: Arc<dyn ChatGateway>,
    tools: Arc<dyn ToolExecutorPort>,
    catalog: Arc<AgentCatalog>,
    max_tool_iterations: usize,
}

impl Orchestrator {
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        tools: Arc<dyn ToolExecutorPort>,
        catalog: Arc<AgentCatalog>,
    ) -> Self {
        Self {
            gateway,
            tools,
            catalog,
            max_tool_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_max_tool_iterations(mut self, max_tool_iterations: usize) -> Self {
        self.max_tool_iterations = max_tool_iterations;
        self
    }

    pub async fn orchestrate(
        &self,
        user_input: &str,
    ) -> Result<OrchestrationOutcome, OrchestrationError> {
        // 1) Plan
        let mut planner = Planner::new(self.gateway.clone(), self.catalog.clone());
        let plan = planner.plan(user_input).await?;
        info!(
            "[Orchestrator] plan: {} step(s) | notes: {}",
            plan.len(),
            plan.notes
        );

        // 2) Execute steps sequentially, in plan order
        let mut steps: Vec<StepRecord> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        for (index, step) in plan.steps.iter().enumerate() {
            let Some(profile) = self.catalog.get(&step.agent) else {
                warn!(
                    "[Orchestrator] unknown agent '{}' at step {}, skipping",
                    step.agent, index
                );
                warnings.push(format!(
                    "unknown agent '{}' skipped at step {}",
                    step.agent, index
                ));
                continue;
            };

            let mut agent =
                ExecutorAgent::from_profile(profile, self.gateway.clone(), self.tools.clone())
                    .with_max_iterations(self.max_tool_iterations);

            let input = if step.input.trim().is_empty() {
                user_input
            } else {
                step.input.as_str()
            };

            let output = agent.run(input).await?;
            steps.push(StepRecord {
                index,
                agent: profile.name().to_string(),
                input: input.to_string(),
                output,
                tool_calls: agent.take_execution_log(),
            });
        }

        // 3) Synthesize the final answer
        let mut synthesizer = Synthesizer::new(self.gateway.clone());
        let final_answer = synthesizer.synthesize(user_input, &steps).await?;

        let trace = RunTrace {
            user_input: user_input.to_string(),
            plan,
            steps,
            warnings,
            final_answer: final_answer.clone(),
        };

        Ok(OrchestrationOutcome {
            final_answer,
            trace,
        })
    }
}
