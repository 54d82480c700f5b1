//! Append-only conversation transcript.
//!
//! The transcript is what gets sent to the model on every call, so order is
//! significant. The only removal is [`Conversation::drop_last`], used to
//! retract the latest assistant reply before asking for a new one.

use crate::types::{Message, Role};

/// Ordered log of turns owned by one session.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a turn at the end of the transcript.
    pub fn append(&mut self, turn: Message) {
        self.turns.push(turn);
    }

    /// All turns in chronological order.
    pub fn turns(&self) -> &[Message] {
        &self.turns
    }

    /// Remove and return the most recent turn. No-op on an empty transcript.
    pub fn drop_last(&mut self) -> Option<Message> {
        self.turns.pop()
    }

    /// The latest turn, if any.
    pub fn last(&self) -> Option<&Message> {
        self.turns.last()
    }

    /// The most recent assistant turn, if any.
    pub fn last_assistant(&self) -> Option<&Message> {
        self.turns.iter().rev().find(|t| t.role == Role::Assistant)
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Human-readable transcript, one `Role: content` entry per turn.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for turn in &self.turns {
            out.push_str(turn.role.label());
            out.push_str(": ");
            out.push_str(&turn.content);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let mut convo = Conversation::new();
        convo.append(Message::system("sys"));
        convo.append(Message::user("ask"));
        convo.append(Message::assistant("reply"));
        let roles: Vec<Role> = convo.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
        assert_eq!(convo.len(), 3);
    }

    #[test]
    fn drop_last_on_empty_is_noop() {
        let mut convo = Conversation::new();
        assert!(convo.drop_last().is_none());
        assert!(convo.is_empty());
    }

    #[test]
    fn drop_last_removes_only_latest_turn() {
        let mut convo = Conversation::new();
        convo.append(Message::user("ask"));
        convo.append(Message::assistant("reply"));
        assert_eq!(convo.drop_last(), Some(Message::assistant("reply")));
        assert_eq!(convo.turns(), &[Message::user("ask")]);
    }

    #[test]
    fn last_assistant_skips_trailing_user_turns() {
        let mut convo = Conversation::new();
        convo.append(Message::assistant("first"));
        convo.append(Message::user("feedback"));
        assert_eq!(convo.last_assistant().map(|t| t.content.as_str()), Some("first"));
        assert_eq!(convo.last().map(|t| t.role), Some(Role::User));
    }

    #[test]
    fn render_labels_each_turn() {
        let mut convo = Conversation::new();
        convo.append(Message::user("list files"));
        convo.append(Message::assistant("ls -la"));
        assert_eq!(convo.render(), "User: list files\nAssistant: ls -la\n");
    }
}
