//! Interactive single-line input with an optional pre-filled buffer.
//!
//! On a TTY the line is edited in raw mode (arrows, Home/End, Emacs kill
//! keys). Otherwise the prompt is printed and one line is read from stdin.
//! Raw mode is held by a guard for the duration of one read only.

use crate::tui::line_buffer::{char_count, LineBuffer};
use crate::tui::settings;
use crate::tui::text::visible_width;
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, BufRead, IsTerminal, Write};

/// Result of reading one interactive input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// User submitted a line.
    Line(String),
    /// End-of-file (`Ctrl-D` on an empty buffer / stdin EOF).
    Eof,
    /// User cancelled input (`Ctrl-C`).
    Cancelled,
}

/// Read one line, showing `prompt` and starting from `initial`.
pub fn read_line(color: bool, prompt: &str, initial: &str) -> io::Result<ReadOutcome> {
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        let stdin = io::stdin();
        return read_line_fallback(&mut stdin.lock(), &mut io::stderr(), prompt, initial);
    }
    read_line_interactive(color, prompt, initial)
}

/// Non-TTY path. A pre-fill cannot be edited here, so it is shown and an
/// empty answer keeps it.
fn read_line_fallback<R, W>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    initial: &str,
) -> io::Result<ReadOutcome>
where
    R: BufRead,
    W: Write,
{
    if !initial.is_empty() {
        writeln!(out, "{}[{initial}]", settings::INDENT_1)?;
    }
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(ReadOutcome::Eof);
    }
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() && !initial.is_empty() {
        return Ok(ReadOutcome::Line(initial.to_string()));
    }
    Ok(ReadOutcome::Line(line.to_string()))
}

fn read_line_interactive(color: bool, prompt: &str, initial: &str) -> io::Result<ReadOutcome> {
    let _guard = RawModeGuard::acquire()?;
    let mut stderr = io::stderr();
    let mut buffer = LineBuffer::prefilled(initial);
    let mut cursor_row = 0usize;

    loop {
        cursor_row = render_line(&mut stderr, color, prompt, &buffer, cursor_row)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => {
                finish_line(&mut stderr, prompt, &buffer, cursor_row)?;
                return Ok(ReadOutcome::Line(buffer.into_text()));
            }
            KeyCode::Char('c') if ctrl => {
                finish_line(&mut stderr, prompt, &buffer, cursor_row)?;
                return Ok(ReadOutcome::Cancelled);
            }
            KeyCode::Char('d') if ctrl => {
                // Ctrl-D exits only when no text is present.
                if buffer.is_empty() {
                    finish_line(&mut stderr, prompt, &buffer, cursor_row)?;
                    return Ok(ReadOutcome::Eof);
                }
                buffer.delete();
            }
            KeyCode::Left => buffer.move_left(),
            KeyCode::Right => buffer.move_right(),
            KeyCode::Home => buffer.move_home(),
            KeyCode::End => buffer.move_end(),
            KeyCode::Backspace => buffer.backspace(),
            KeyCode::Delete => buffer.delete(),
            KeyCode::Char('a') if ctrl => buffer.move_home(),
            KeyCode::Char('e') if ctrl => buffer.move_end(),
            KeyCode::Char('b') if ctrl => buffer.move_left(),
            KeyCode::Char('f') if ctrl => buffer.move_right(),
            KeyCode::Char('k') if ctrl => buffer.kill_to_end(),
            KeyCode::Char('u') if ctrl => buffer.kill_to_start(),
            KeyCode::Char('w') if ctrl => buffer.kill_word_back(),
            KeyCode::Char(ch) => {
                // Ignore control/alt-modified printable keys.
                if ctrl || key.modifiers.contains(KeyModifiers::ALT) {
                    continue;
                }
                buffer.insert(ch);
            }
            _ => {}
        }
    }
}

/// Where the cursor sits, in wrapped rows/columns, for a given char offset.
fn wrapped_position(offset: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (offset / columns, offset % columns)
}

/// Repaint prompt + buffer and return the row the cursor ends on.
fn render_line<W: Write>(
    out: &mut W,
    color: bool,
    prompt: &str,
    buffer: &LineBuffer,
    previous_cursor_row: usize,
) -> io::Result<usize> {
    let columns = terminal_columns();
    if previous_cursor_row > 0 {
        out.queue(MoveUp(previous_cursor_row as u16))?;
    }
    out.queue(MoveToColumn(0))?;
    out.queue(Clear(ClearType::FromCursorDown))?;
    if color {
        out.queue(PrintStyledContent(prompt.with(settings::COLOR_PROMPT).bold()))?;
    } else {
        out.queue(Print(prompt))?;
    }
    out.queue(Print(buffer.text()))?;

    let prompt_width = visible_width(prompt);
    let total = prompt_width + char_count(buffer.text());
    let (end_row, _) = wrapped_position(total, columns);
    if total > 0 && total % columns == 0 {
        // Leave the pending-wrap state so the row math below holds.
        out.queue(Print("\r\n"))?;
    }

    let (cursor_row, cursor_col) = wrapped_position(prompt_width + buffer.cursor(), columns);
    if end_row > cursor_row {
        out.queue(MoveUp((end_row - cursor_row) as u16))?;
    }
    out.queue(MoveToColumn(cursor_col as u16))?;
    out.flush()?;
    Ok(cursor_row)
}

/// Move below the edited text so later output starts on a fresh line.
fn finish_line<W: Write>(
    out: &mut W,
    prompt: &str,
    buffer: &LineBuffer,
    cursor_row: usize,
) -> io::Result<()> {
    let columns = terminal_columns();
    let total = visible_width(prompt) + char_count(buffer.text());
    let (end_row, _) = wrapped_position(total, columns);
    let below = end_row.saturating_sub(cursor_row);
    for _ in 0..below {
        out.queue(Print("\r\n"))?;
    }
    out.queue(Print("\r\n"))?;
    out.flush()
}

fn terminal_columns() -> usize {
    terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(settings::PANEL_FALLBACK_COLUMNS)
        .max(1)
}

struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
