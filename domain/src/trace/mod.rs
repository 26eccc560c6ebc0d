//! Run trace value objects and Mermaid rendering
//!
//! One [`RunTrace`] is produced per orchestration run for external
//! rendering/export: the original request, the plan, per-step tool-call
//! records, recorded warnings, and the final answer.

use crate::plan::entities::Plan;
use crate::tool::value_objects::ExecutionLogEntry;
use serde::{Deserialize, Serialize};

/// Record of one executed plan step.
///
/// Keyed by step index as well as agent name, so a plan that runs the same
/// agent twice produces two records instead of silently overwriting one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based position in the plan
    pub index: usize,
    /// Catalog agent that ran this step
    pub agent: String,
    /// Input the agent received
    pub input: String,
    /// The agent's output
    pub output: String,
    /// One entry per tool invocation, in call order
    pub tool_calls: Vec<ExecutionLogEntry>,
}

/// Structured artifact of one orchestration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunTrace {
    pub user_input: String,
    pub plan: Plan,
    pub steps: Vec<StepRecord>,
    /// Degradations recorded along the way (skipped agents, fallbacks)
    pub warnings: Vec<String>,
    pub final_answer: String,
}

/// Maximum label length in the rendered flowchart
const MAX_LABEL: usize = 60;

/// Render a run trace as a Mermaid flowchart:
/// user -> planner -> one node per step -> synthesizer -> answer.
pub fn render_mermaid(trace: &RunTrace) -> String {
    let mut lines = vec!["flowchart TD".to_string()];

    lines.push(format!(
        "    A[\"User: {}\"]",
        mermaid_label(&trace.user_input)
    ));
    lines.push("    A --> B[\"PlannerAgent\"]".to_string());

    for step in &trace.steps {
        lines.push(format!(
            "    B --> C{}[\"{}\"]",
            step.index,
            mermaid_label(&step.agent)
        ));
        for (call_index, call) in step.tool_calls.iter().enumerate() {
            lines.push(format!(
                "    C{}_{}([\"{}\"])",
                step.index,
                call_index,
                mermaid_label(&call.tool_name)
            ));
            lines.push(format!(
                "    C{} --> C{}_{}",
                step.index, step.index, call_index
            ));
        }
        lines.push(format!("    C{} --> D[\"SynthesizerAgent\"]", step.index));
    }

    if trace.steps.is_empty() {
        // Empty plan still reaches the synthesizer
        lines.push("    B --> D[\"SynthesizerAgent\"]".to_string());
    }

    lines.push(format!(
        "    D --> E[\"Answer: {}\"]",
        mermaid_label(&trace.final_answer)
    ));

    lines.join("\n")
}

/// Sanitize free text for use inside a Mermaid node label.
fn mermaid_label(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| match c {
            '"' => '\'',
            '[' | ']' | '(' | ')' | '{' | '}' => ' ',
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect();

    let cleaned = cleaned.trim();
    if cleaned.chars().count() > MAX_LABEL {
        let truncated: String = cleaned.chars().take(MAX_LABEL).collect();
        format!("{truncated}...")
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::entities::{Plan, PlanStep};
    use crate::tool::value_objects::ToolInvocation;

    fn sample_trace() -> RunTrace {
        let invocation = ToolInvocation::new("get_weather").with_arg("location", "Hanoi");
        RunTrace {
            user_input: "What's the weather in Hanoi?".to_string(),
            plan: Plan::new(
                vec![PlanStep::new("WeatherAgent", "weather in Hanoi")],
                "single lookup",
            ),
            steps: vec![StepRecord {
                index: 0,
                agent: "WeatherAgent".to_string(),
                input: "weather in Hanoi".to_string(),
                output: "Hanoi: 31C".to_string(),
                tool_calls: vec![ExecutionLogEntry::new(&invocation, "Hanoi: 31C")],
            }],
            warnings: Vec::new(),
            final_answer: "It is 31C in Hanoi.".to_string(),
        }
    }

    #[test]
    fn test_render_mermaid_links_pipeline_stages() {
        let rendered = render_mermaid(&sample_trace());
        assert!(rendered.starts_with("flowchart TD"));
        assert!(rendered.contains("A --> B[\"PlannerAgent\"]"));
        assert!(rendered.contains("B --> C0[\"WeatherAgent\"]"));
        assert!(rendered.contains("C0 --> D[\"SynthesizerAgent\"]"));
        assert!(rendered.contains("D --> E[\"Answer:"));
        assert!(rendered.contains("get_weather"));
    }

    #[test]
    fn test_render_mermaid_empty_plan_still_reaches_synthesizer() {
        let trace = RunTrace {
            user_input: "Recite a poem".to_string(),
            plan: Plan::empty("no applicable agent"),
            steps: Vec::new(),
            warnings: Vec::new(),
            final_answer: "Sorry, no agent applies.".to_string(),
        };
        let rendered = render_mermaid(&trace);
        assert!(rendered.contains("B --> D[\"SynthesizerAgent\"]"));
    }

    #[test]
    fn test_mermaid_label_sanitizes_and_truncates() {
        assert_eq!(mermaid_label("a \"quoted\" [label]"), "a 'quoted'  label");
        let long = "x".repeat(100);
        let label = mermaid_label(&long);
        assert!(label.ends_with("..."));
        assert_eq!(label.chars().count(), MAX_LABEL + 3);
    }

    #[test]
    fn test_trace_serializes_to_json() {
        let trace = sample_trace();
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["user_input"], "What's the weather in Hanoi?");
        assert_eq!(json["steps"][0]["agent"], "WeatherAgent");
        assert_eq!(json["steps"][0]["tool_calls"][0]["tool_name"], "get_weather");
    }
}
