//! Greedy word wrapping for commit message bodies.

/// Wraps `text` so no line exceeds `width` characters where possible.
///
/// The text is trimmed as a whole and existing line breaks (including blank
/// lines) are kept. Each line is broken greedily at whitespace; the
/// whitespace at a break point is dropped, while spacing between words that
/// stay on the same line is left as typed. A word longer than `width` is
/// placed on its own line without being cut. Lines are joined with `\n` and
/// never indented.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);

    text.trim()
        .split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut lines: Vec<&str> = Vec::new();
    // Byte range of the output line being filled and its length in chars.
    let mut current: Option<(usize, usize)> = None;
    let mut current_len = 0;

    for (start, end) in word_spans(line) {
        match current {
            Some((line_start, line_end)) => {
                let extra = line[line_end..end].chars().count();
                if current_len + extra > width {
                    lines.push(&line[line_start..line_end]);
                    current = Some((start, end));
                    current_len = line[start..end].chars().count();
                } else {
                    current = Some((line_start, end));
                    current_len += extra;
                }
            }
            None => {
                current = Some((start, end));
                current_len = line[start..end].chars().count();
            }
        }
    }

    if let Some((line_start, line_end)) = current {
        lines.push(&line[line_start..line_end]);
    }

    lines.join("\n")
}

/// Byte ranges of the whitespace-separated words in `line`.
fn word_spans(line: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut word_start = None;

    for (idx, ch) in line.char_indices() {
        match (ch.is_whitespace(), word_start) {
            (true, Some(start)) => {
                spans.push((start, idx));
                word_start = None;
            }
            (false, None) => word_start = Some(idx),
            _ => {}
        }
    }

    if let Some(start) = word_start {
        spans.push((start, line.len()));
    }

    spans
}
