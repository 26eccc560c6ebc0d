//! System prompt builders for the planner, tool agents, and synthesizer

use crate::catalog::AgentDescriptor;

/// Planner system prompt template; `{AGENT_LIST}` is replaced at build time.
const PLANNER_PROMPT_TEMPLATE: &str = r#"You are PlannerAgent.

Your task:
- Decide which specialist agents (from the catalog below) should handle the user request.
- Extract clean inputs for each agent.
- Return STRICT JSON only (no extra text) with this schema:
{
  "reasoning": "<your thought process: interpret the request, map needs to agent capabilities>",
  "plan": [
    {"agent": "<AgentName>", "input": "<string>"}
  ],
  "notes": "<short rationale>"
}

Catalog of available agents (names + capabilities):
{AGENT_LIST}

Guidelines:
- Choose the minimal set of agents that fully addresses the request.
- If the user asks for multiple things, include multiple steps in a sensible order.
- If no agent applies, return {"plan": [], "notes": "no applicable agent"}.
- Do NOT include agents not listed in the catalog. Do NOT include SynthesizerAgent in the plan.
- Output JSON ONLY - no markdown, no prose.
"#;

/// Synthesizer system prompt
pub const SYNTHESIZER_PROMPT: &str = "You are SynthesizerAgent.\n\
Given the user's request and the intermediate agent outputs, compose a clear, concise final answer.\n\
Preserve key facts and avoid redundancy.";

/// Build the planner system prompt from catalog descriptors.
///
/// One `- name: description` line per agent; an empty catalog renders as
/// `- (none)` so the model can still answer with an empty plan.
pub fn planner_prompt<'a>(descriptors: impl Iterator<Item = &'a AgentDescriptor>) -> String {
    let lines: Vec<String> = descriptors
        .map(|d| {
            let desc = if d.description.trim().is_empty() {
                "(no description provided)"
            } else {
                d.description.trim()
            };
            format!("- {}: {}", d.name, desc)
        })
        .collect();

    let agent_list = if lines.is_empty() {
        "- (none)".to_string()
    } else {
        lines.join("\n")
    };

    PLANNER_PROMPT_TEMPLATE.replace("{AGENT_LIST}", &agent_list)
}

/// Build the system prompt for a tool-using agent.
pub fn tool_agent_prompt(agent_name: &str, tool_instruction: &str) -> String {
    format!("You are {agent_name}.\n{tool_instruction}")
}
