//! Agent catalog - one structure for prompt-building and dispatch
//!
//! The catalog serves two consumers: the planner, which renders
//! `- name: description` lines into its system prompt, and the
//! orchestrator, which resolves plan steps to executor profiles. Keeping
//! both in one immutable structure removes the possibility of the prompt
//! catalog and the dispatch registry drifting apart.

use serde::{Deserialize, Serialize};

/// Static catalog entry exposed to the planner: name and capability text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDescriptor {
    pub name: String,
    pub description: String,
}

impl AgentDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Everything needed to instantiate one executor agent.
///
/// `tool_names` is the subset of the tool registry this agent advertises
/// to the model (empty means the agent runs without tools). `keywords`
/// drive the planner's deterministic fallback.
#[derive(Debug, Clone)]
pub struct AgentProfile {
    pub descriptor: AgentDescriptor,
    pub system_prompt: String,
    pub tool_names: Vec<String>,
    pub keywords: Vec<String>,
}

impl AgentProfile {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            descriptor: AgentDescriptor::new(name, description),
            system_prompt: system_prompt.into(),
            tool_names: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn with_tools<I, S>(mut self, tool_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tool_names = tool_names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

/// Immutable, ordered collection of executor-agent profiles.
///
/// Registration order is significant: it decides fallback-plan step order.
/// The planner and the synthesizer are never catalog entries - only agents
/// eligible to appear in a plan are registered here.
#[derive(Debug, Clone, Default)]
pub struct AgentCatalog {
    profiles: Vec<AgentProfile>,
}

impl AgentCatalog {
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    pub fn register(mut self, profile: AgentProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Resolve an agent by name (dispatch path)
    pub fn get(&self, name: &str) -> Option<&AgentProfile> {
        self.profiles.iter().find(|p| p.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &AgentProfile> {
        self.profiles.iter()
    }

    /// Descriptors in registration order (prompt-building path)
    pub fn descriptors(&self) -> impl Iterator<Item = &AgentDescriptor> {
        self.profiles.iter().map(|p| &p.descriptor)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
