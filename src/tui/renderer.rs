//! Terminal output renderer.
//!
//! Conversation turns and the transcript go to stdout; prompts, the caution
//! line, the current command, warnings, and errors go to stderr.

use crate::conversation::Conversation;
use crate::extract::{extract, Extraction};
use crate::tui::markdown::render_markdown_for_terminal;
use crate::tui::settings;
use crate::tui::text::{pad_to_width, visible_width, wrap_line};
use crate::types::{Message, Role};
use crossterm::style::{Color, Stylize};
use crossterm::terminal;

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Echo one appended turn as `Role: content`.
    pub fn turn(&self, turn: &Message) {
        let body = turn_body(turn);
        let label = format!("{}:", turn.role.label());
        if self.color {
            let tint = role_color(turn.role);
            println!("{} {}", label.with(tint).bold(), body.with(tint));
        } else {
            println!("{label} {body}");
        }
    }

    /// Show the current candidate command.
    pub fn command(&self, command: Option<&str>) {
        let text = command.unwrap_or(settings::LABEL_NO_COMMAND);
        if self.color {
            eprintln!(
                "{} {}",
                settings::LABEL_COMMAND.bold(),
                text.with(settings::COLOR_COMMAND).bold()
            );
        } else {
            eprintln!("{} {text}", settings::LABEL_COMMAND);
        }
    }

    /// Print the pre-action safety reminder.
    pub fn caution(&self, text: &str) {
        if self.color {
            eprintln!("{}", text.with(settings::COLOR_CAUTION));
        } else {
            eprintln!("{text}");
        }
    }

    /// Print the whole transcript inside a rounded panel.
    pub fn transcript(&self, conversation: &Conversation) {
        let width = terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(settings::PANEL_FALLBACK_COLUMNS)
            .min(settings::PANEL_MAX_COLUMNS);
        println!();
        for row in transcript_panel(conversation, width) {
            if !self.color {
                println!("{}", row.text);
                continue;
            }
            match row.role {
                Some(role) => {
                    let (left, rest) = split_border(&row.text);
                    let (inner, right) = split_border_end(rest);
                    println!(
                        "{}{}{}",
                        left.with(settings::COLOR_PANEL_BORDER),
                        inner.with(role_color(role)),
                        right.with(settings::COLOR_PANEL_BORDER)
                    );
                }
                None => println!("{}", row.text.with(settings::COLOR_PANEL_BORDER)),
            }
        }
    }

    /// Print a warning line (to stderr).
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_WARNING);
        }
    }

    /// Print an error line (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }
}

/// Text echoed for a turn. Assistant markdown is laid out by termimad unless
/// the reply carries a fenced block, which is shown verbatim so the fences the
/// command was taken from stay visible.
fn turn_body(turn: &Message) -> String {
    match turn.role {
        Role::Assistant => match extract(&turn.content) {
            Extraction::FencedBlock(_) => turn.content.trim_end().to_string(),
            _ => render_markdown_for_terminal(&turn.content),
        },
        Role::User | Role::System => turn.content.clone(),
    }
}

fn role_color(role: Role) -> Color {
    match role {
        Role::Assistant => settings::COLOR_ASSISTANT,
        Role::User => settings::COLOR_USER,
        Role::System => settings::COLOR_SYSTEM,
    }
}

fn split_border(row: &str) -> (&str, &str) {
    let idx = row.char_indices().nth(2).map(|(i, _)| i).unwrap_or(row.len());
    row.split_at(idx)
}

fn split_border_end(row: &str) -> (&str, &str) {
    let count = row.chars().count();
    let idx = row
        .char_indices()
        .nth(count.saturating_sub(2))
        .map(|(i, _)| i)
        .unwrap_or(row.len());
    row.split_at(idx)
}

/// One laid-out panel row; `role` is set for content rows.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PanelRow {
    text: String,
    role: Option<Role>,
}

/// Lay out the transcript as bordered rows no wider than `width`.
fn transcript_panel(conversation: &Conversation, width: usize) -> Vec<PanelRow> {
    // Two border chars plus one space of padding on each side.
    let width = width.max(12);
    let inner = width - 4;
    let title = format!(" {} ", settings::LABEL_TRANSCRIPT);
    let title_fill = (width - 2).saturating_sub(visible_width(&title) + 1);

    let mut rows = Vec::new();
    let mut top = String::new();
    top.push(settings::PANEL_TOP_LEFT);
    top.push(settings::PANEL_HORIZONTAL);
    top.push_str(&title);
    top.extend(std::iter::repeat(settings::PANEL_HORIZONTAL).take(title_fill));
    top.push(settings::PANEL_TOP_RIGHT);
    rows.push(PanelRow {
        text: top,
        role: None,
    });

    for turn in conversation.turns() {
        let entry = format!("{}: {}", turn.role.label(), turn.content);
        for line in entry.lines() {
            for wrapped in wrap_line(line, inner) {
                rows.push(PanelRow {
                    text: format!(
                        "{} {} {}",
                        settings::PANEL_VERTICAL,
                        pad_to_width(&wrapped, inner),
                        settings::PANEL_VERTICAL
                    ),
                    role: Some(turn.role),
                });
            }
        }
    }

    let mut bottom = String::new();
    bottom.push(settings::PANEL_BOTTOM_LEFT);
    bottom.extend(std::iter::repeat(settings::PANEL_HORIZONTAL).take(width - 2));
    bottom.push(settings::PANEL_BOTTOM_RIGHT);
    rows.push(PanelRow {
        text: bottom,
        role: None,
    });
    rows
}
