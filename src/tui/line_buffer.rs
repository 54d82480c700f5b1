//! Editable single-line buffer with a char-indexed cursor.
//!
//! The cursor counts chars, not bytes, so editing never splits a UTF-8
//! sequence. Byte offsets are derived only at mutation time.

/// Text plus cursor for one interactive read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    /// Start with `initial` pre-filled and the cursor at its end.
    pub(crate) fn prefilled(initial: &str) -> Self {
        // Multi-line replies are flattened; the editor is single-line.
        let text: String = initial
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        let cursor = char_count(&text);
        Self { text, cursor }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn into_text(self) -> String {
        self.text
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn insert(&mut self, ch: char) {
        let byte_idx = byte_index_at_char(&self.text, self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Delete the char before the cursor (Backspace).
    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.delete_range(self.cursor - 1, self.cursor);
        self.cursor -= 1;
    }

    /// Delete the char under the cursor (Delete).
    pub(crate) fn delete(&mut self) {
        if self.cursor < char_count(&self.text) {
            self.delete_range(self.cursor, self.cursor + 1);
        }
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        if self.cursor < char_count(&self.text) {
            self.cursor += 1;
        }
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = char_count(&self.text);
    }

    /// Emacs-style kill to end of line (Ctrl-K).
    pub(crate) fn kill_to_end(&mut self) {
        let end = char_count(&self.text);
        self.delete_range(self.cursor, end);
    }

    /// Emacs-style kill to start of line (Ctrl-U).
    pub(crate) fn kill_to_start(&mut self) {
        self.delete_range(0, self.cursor);
        self.cursor = 0;
    }

    /// Emacs-style backward-kill-word (Ctrl-W).
    pub(crate) fn kill_word_back(&mut self) {
        let start = self.previous_word_start();
        self.delete_range(start, self.cursor);
        self.cursor = start;
    }

    fn previous_word_start(&self) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut idx = self.cursor;
        while idx > 0 && chars[idx - 1].is_whitespace() {
            idx -= 1;
        }
        while idx > 0 && !chars[idx - 1].is_whitespace() {
            idx -= 1;
        }
        idx
    }

    fn delete_range(&mut self, start_char: usize, end_char: usize) {
        if start_char >= end_char {
            return;
        }
        let start = byte_index_at_char(&self.text, start_char);
        let end = byte_index_at_char(&self.text, end_char);
        self.text.replace_range(start..end, "");
    }
}

/// Convert a char index to a byte index, clamping to the end of `s`.
fn byte_index_at_char(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

pub(crate) fn char_count(s: &str) -> usize {
    s.chars().count()
}
