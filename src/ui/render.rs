//! Rendering contract consumed by the session.
//!
//! `Renderer` is the terminal implementation; tests substitute a recording
//! sink without coupling to stdout/stderr.

use crate::conversation::Conversation;
use crate::types::Message;

pub use crate::tui::renderer::Renderer;

/// Injectable rendering interface used by orchestration code.
pub trait RenderSink: Send + Sync {
    /// Echo a turn that was just appended to the conversation.
    fn turn(&self, turn: &Message);
    /// Show the current candidate command (`None` when there is none yet).
    fn command(&self, command: Option<&str>);
    /// Show the reminder printed before every action prompt.
    fn caution(&self, text: &str);
    /// Show the full transcript.
    fn transcript(&self, conversation: &Conversation);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

impl RenderSink for Renderer {
    fn turn(&self, turn: &Message) {
        self.turn(turn);
    }

    fn command(&self, command: Option<&str>) {
        self.command(command);
    }

    fn caution(&self, text: &str) {
        self.caution(text);
    }

    fn transcript(&self, conversation: &Conversation) {
        self.transcript(conversation);
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }
}
