//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! Prompt strings, labels, glyphs, and colors live here so the look can be
//! tweaked in one place.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const PANEL_FALLBACK_COLUMNS: usize = 100;
pub const PANEL_MAX_COLUMNS: usize = 120;

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_INITIAL: &str = "Write a command: ";
pub const PROMPT_EDIT: &str = "Write a command (q for quit): ";
pub const PROMPT_FEEDBACK: &str = "Feedback: ";
pub const PROMPT_ACTION: &str =
    "1. run? [(r)un/(q)uit/e(x)plain/(f)eedback/(e)dit/(p)rint conversation/re(t)ry]: ";
pub const PROMPT_USE_RAW_REPLY: &str =
    "No code block in the reply. Use the whole reply as the command? [y/N]: ";

/// Sentinel typed at a free-text prompt to leave the program.
pub const QUIT_SENTINEL: &str = "q";

// ---------------------------------------------------------------------------
// Labels / glyphs
// ---------------------------------------------------------------------------

pub const LABEL_COMMAND: &str = "Command:";
pub const LABEL_NO_COMMAND: &str = "(none)";
pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const LABEL_TRANSCRIPT: &str = "Conversation so far";
pub const CAUTION_TEXT: &str =
    "Careful! Bash commands are powerful... make sure you understand the prompt";

pub const PANEL_TOP_LEFT: char = '╭';
pub const PANEL_TOP_RIGHT: char = '╮';
pub const PANEL_BOTTOM_LEFT: char = '╰';
pub const PANEL_BOTTOM_RIGHT: char = '╯';
pub const PANEL_HORIZONTAL: char = '─';
pub const PANEL_VERTICAL: char = '│';

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_ASSISTANT: Color = Color::Green;
pub const COLOR_USER: Color = Color::White;
pub const COLOR_SYSTEM: Color = Color::DarkGrey;
pub const COLOR_COMMAND: Color = Color::Cyan;
pub const COLOR_CAUTION: Color = Color::Red;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_PANEL_BORDER: Color = Color::DarkGrey;
pub const COLOR_PROMPT: Color = Color::White;
