//! Markdown-to-terminal rendering for model replies.
//!
//! `termimad` lays out lists, headings, and code fences without a full TUI
//! view. The skin carries no styles; the renderer applies its own colors.

use termimad::MadSkin;

/// Render markdown into plain terminal text with structure preserved.
pub fn render_markdown_for_terminal(input: &str) -> String {
    let skin = MadSkin::no_style();
    let formatted = skin.text(input, None).to_string();
    formatted.trim_end_matches('\n').to_string()
}
