//! Greedy word wrapping.
//!
//! Lines are only ever broken at an ASCII space, which is replaced by the
//! line break. Existing line breaks start a new line. A word wider than the
//! target width is never split and overflows its line. Widths are measured
//! in terminal columns, so CJK text and emoji count double.

use unicode_width::UnicodeWidthChar;

/// Display columns of one character; tabs count as a single column
fn char_columns(c: char) -> usize {
    if c == '\t' {
        return 1;
    }
    c.width().unwrap_or(0)
}

/// Wrap `text` to at most `width` columns per line where spaces allow.
///
/// A width of 0 disables wrapping.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();

    // columns[i] = display columns of chars[..i]
    let mut columns = Vec::with_capacity(chars.len() + 1);
    let mut total = 0;
    columns.push(total);
    for &c in &chars {
        total += char_columns(c);
        columns.push(total);
    }
    let span = |from: usize, to: usize| columns[to] - columns[from];

    let mut line_start = 0;
    let mut last_space = 0;
    let mut breaks = 0usize;

    for current in 0..chars.len() {
        match chars[current] {
            '\n' => {
                line_start = current + 1;
                last_space = current + 1;
            }
            ' ' => {
                if span(line_start, current) >= width {
                    chars[current] = '\n';
                    line_start = current + 1;
                    breaks += 1;
                }
                last_space = current;
            }
            _ => {
                // Over the limit inside a word: go back to the last space
                if span(line_start, current) >= width && line_start != last_space {
                    if chars[last_space] == ' ' {
                        chars[last_space] = '\n';
                        breaks += 1;
                    }
                    line_start = last_space + 1;
                }
            }
        }
    }

    tracing::trace!("Wrapped text at {} columns with {} break(s)", width, breaks);
    chars.into_iter().collect()
}
