//! Append-only conversation channel

use super::entities::{Role, ToolCall, Turn};

/// An ordered, append-only log of role-tagged turns (Entity).
///
/// The channel is the exact context sent to the model backend. Turns are
/// immutable once appended; the only mutation is appending. Exactly one
/// system turn precedes all others: [`Channel::ensure_system`] is a no-op
/// when a system turn is already present, so injecting a system prompt into
/// a shared channel cannot duplicate it.
#[derive(Debug, Clone, Default)]
pub struct Channel {
    turns: Vec<Turn>,
}

impl Channel {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Create a channel seeded with a system turn.
    pub fn with_system(system_prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::system(system_prompt)],
        }
    }

    /// Insert a system turn only if none is present yet.
    ///
    /// Returns `true` if the turn was inserted.
    pub fn ensure_system(&mut self, system_prompt: impl Into<String>) -> bool {
        if self.has_system() {
            return false;
        }
        self.turns.insert(0, Turn::system(system_prompt));
        true
    }

    pub fn has_system(&self) -> bool {
        self.turns.iter().any(|t| t.role == Role::System)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::assistant(content));
    }

    pub fn push_assistant_tool_calls(&mut self, tool_calls: Vec<ToolCall>) {
        self.turns.push(Turn::assistant_tool_calls(tool_calls));
    }

    pub fn push_tool_result(
        &mut self,
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        result: impl Into<String>,
    ) {
        self.turns
            .push(Turn::tool_result(tool_call_id, tool_name, result));
    }

    /// The last assistant content, if any.
    pub fn last_assistant_content(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.role == Role::Assistant && t.content.is_some())
            .and_then(|t| t.content.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_system_seeds_first_turn() {
        let channel = Channel::with_system("You are WeatherAgent.");
        assert_eq!(channel.len(), 1);
        assert_eq!(channel.turns()[0].role, Role::System);
    }

    #[test]
    fn test_ensure_system_is_idempotent() {
        let mut channel = Channel::with_system("first prompt");
        assert!(!channel.ensure_system("second prompt"));
        assert_eq!(channel.len(), 1);
        assert_eq!(channel.turns()[0].text_content(), "first prompt");
    }

    #[test]
    fn test_ensure_system_inserts_before_existing_turns() {
        let mut channel = Channel::new();
        channel.push_user("hello");
        assert!(channel.ensure_system("prompt"));
        assert_eq!(channel.turns()[0].role, Role::System);
        assert_eq!(channel.turns()[1].role, Role::User);
    }

    #[test]
    fn test_append_order_is_preserved() {
        let mut channel = Channel::with_system("sys");
        channel.push_user("question");
        channel.push_assistant_tool_calls(vec![ToolCall::new("call_1", "add", "{}")]);
        channel.push_tool_result("call_1", "add", "3");
        channel.push_assistant("answer");

        let roles: Vec<Role> = channel.turns().iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::System,
                Role::User,
                Role::Assistant,
                Role::Tool,
                Role::Assistant
            ]
        );
    }

    #[test]
    fn test_last_assistant_content_skips_tool_call_turns() {
        let mut channel = Channel::new();
        channel.push_assistant("first");
        channel.push_assistant_tool_calls(vec![ToolCall::new("c", "t", "{}")]);
        assert_eq!(channel.last_assistant_content(), Some("first"));
    }
}
