//! Pulls a shell command out of a free-form model reply.
//!
//! Lookup order is fixed: the first fenced code block, then the first inline
//! code span, then the whole reply. The last case is returned as
//! [`Extraction::RawReply`] so the caller can ask the user before treating
//! prose as a command. Nothing here touches the terminal.

const FENCE: &str = "```";

/// Info strings dropped from the first line of a fenced block.
const SHELL_INFO_STRINGS: &[&str] = &[
    "bash",
    "sh",
    "shell",
    "zsh",
    "fish",
    "console",
    "shell-session",
    "text",
    "plaintext",
];

/// Outcome of scanning one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Trimmed body of the first triple-backtick block.
    FencedBlock(String),
    /// Trimmed body of the first single-backtick span.
    InlineSpan(String),
    /// No code markers; the trimmed reply needs user confirmation.
    RawReply(String),
    /// Reply was blank.
    NoCommand,
}

/// Classify `reply` and isolate its command text.
pub fn extract(reply: &str) -> Extraction {
    if let Some(body) = fenced_block(reply) {
        return Extraction::FencedBlock(body);
    }
    if let Some(body) = inline_span(reply) {
        return Extraction::InlineSpan(body);
    }
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        Extraction::NoCommand
    } else {
        Extraction::RawReply(trimmed.to_string())
    }
}

fn fenced_block(reply: &str) -> Option<String> {
    let mut rest = reply;
    while let Some(open) = rest.find(FENCE) {
        let after_open = &rest[open + FENCE.len()..];
        let close = after_open.find(FENCE)?;
        let body = strip_info_string(&after_open[..close]).trim();
        if !body.is_empty() {
            return Some(body.to_string());
        }
        rest = &after_open[close + FENCE.len()..];
    }
    None
}

/// Drop a leading `bash`/`sh`/... line when real content follows it.
fn strip_info_string(body: &str) -> &str {
    let Some((first, remainder)) = body.split_once('\n') else {
        return body;
    };
    let tag = first.trim().to_ascii_lowercase();
    if SHELL_INFO_STRINGS.contains(&tag.as_str()) && !remainder.trim().is_empty() {
        remainder
    } else {
        body
    }
}

fn inline_span(reply: &str) -> Option<String> {
    let bytes = reply.as_bytes();
    let mut idx = 0usize;
    while idx < bytes.len() {
        if bytes[idx] != b'`' {
            idx += 1;
            continue;
        }
        let run = backtick_run(bytes, idx);
        let open_end = idx + run;
        if run != 1 {
            // Longer runs are unclosed fences or double-backtick spans.
            idx = open_end;
            continue;
        }
        let Some(close) = find_single_backtick(bytes, open_end) else {
            return None;
        };
        let body = reply[open_end..close].trim();
        if !body.is_empty() {
            return Some(body.to_string());
        }
        idx = close + 1;
    }
    None
}

fn backtick_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|b| **b == b'`').count()
}

/// Position of the next backtick run of length exactly one.
fn find_single_backtick(bytes: &[u8], from: usize) -> Option<usize> {
    let mut idx = from;
    while idx < bytes.len() {
        if bytes[idx] == b'`' {
            let run = backtick_run(bytes, idx);
            if run == 1 {
                return Some(idx);
            }
            idx += run;
        } else {
            idx += 1;
        }
    }
    None
}
