//! Text layout helpers for the transcript panel and the line editor.

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Right-pad `s` with spaces up to `width` visible chars.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    let used = visible_width(s);
    if used < width {
        out.extend(std::iter::repeat(' ').take(width - used));
    }
    out
}

/// Wrap one line into rows of at most `max_width` chars.
///
/// Breaks at the last whitespace inside the window when there is one, and
/// hard-splits long tokens otherwise. Always yields at least one row.
pub fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = line.chars().collect();
    let mut rows = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let limit = start + max_width;
        if limit >= chars.len() {
            rows.push(chars[start..].iter().collect());
            break;
        }
        let split = if chars[limit].is_whitespace() {
            limit
        } else {
            (start + 1..limit)
                .rev()
                .find(|idx| chars[*idx].is_whitespace())
                .unwrap_or(limit)
        };
        rows.push(chars[start..split].iter().collect::<String>().trim_end().to_string());
        start = split;
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_prefers_word_boundaries() {
        assert_eq!(wrap_line("one two three", 7), vec!["one two", "three"]);
    }

    #[test]
    fn wrap_hard_splits_long_tokens() {
        assert_eq!(wrap_line("superlongtoken", 5), vec!["super", "longt", "oken"]);
    }

    #[test]
    fn wrap_keeps_empty_lines() {
        assert_eq!(wrap_line("", 10), vec![String::new()]);
        assert!(wrap_line("abc", 0).is_empty());
    }

    #[test]
    fn pad_counts_chars_not_bytes() {
        assert_eq!(pad_to_width("é", 3), "é  ");
        assert_eq!(pad_to_width("long", 2), "long");
        assert_eq!(visible_width("ls -la"), 6);
    }
}
