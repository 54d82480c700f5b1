//! Line-input contract consumed by the session.

use std::io;

pub use crate::tui::ReadOutcome;

/// Blocking line reader.
///
/// `initial` pre-fills the editable buffer; pass `""` for an empty line.
pub trait LineInput {
    fn read_line(&mut self, prompt: &str, initial: &str) -> io::Result<ReadOutcome>;
}

/// Reads from the controlling terminal (or stdin when not a TTY).
#[derive(Debug, Clone, Copy)]
pub struct TerminalInput {
    color: bool,
}

impl TerminalInput {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl LineInput for TerminalInput {
    fn read_line(&mut self, prompt: &str, initial: &str) -> io::Result<ReadOutcome> {
        crate::tui::read_line(self.color, prompt, initial)
    }
}
