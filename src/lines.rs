//! Logical line assembly for the properties format.
//!
//! A definition may span several physical lines chained with a trailing
//! backslash. The marker only counts when the run of trailing backslashes is
//! odd; an even run is an escaped backslash in the value. Comment and blank
//! lines are complete logical lines on their own and never continue.

use crate::escape::is_props_space;

/// Number of leading space/tab/form-feed characters in `s`.
pub(crate) fn leading_space_len(s: &str) -> usize {
    s.chars()
        .take_while(|&c| is_props_space(c))
        .map(char::len_utf8)
        .sum()
}

/// `s` without its leading space/tab/form-feed run.
pub(crate) fn strip_leading_spaces(s: &str) -> &str {
    &s[leading_space_len(s)..]
}

/// True when the line's run of trailing backslashes has odd length, i.e. the
/// final backslash is a continuation marker rather than an escaped one.
pub(crate) fn has_continuation_marker(s: &str) -> bool {
    let backslashes = s.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 1
}

/// What a logical line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts with `#` or `!` once leading whitespace is stripped.
    Comment,
    /// Empty, or whitespace only.
    Blank,
    /// Anything else; a key/value definition candidate.
    Definition,
}

/// One logical line: the assembled text plus the physical lines it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Assembled text: leading whitespace stripped, continuations joined.
    pub text: String,
    /// The original physical lines, byte for byte (leading whitespace and
    /// any trailing CR included), for layout-preserving rewrites.
    pub raw: Vec<String>,
}

impl LogicalLine {
    pub fn kind(&self) -> LineKind {
        if self.text.is_empty() {
            LineKind::Blank
        } else if self.text.starts_with('#') || self.text.starts_with('!') {
            LineKind::Comment
        } else {
            LineKind::Definition
        }
    }

    /// The leading whitespace of the first physical line.
    pub fn leading_spaces(&self) -> &str {
        let first = self.raw.first().map(String::as_str).unwrap_or("");
        &first[..leading_space_len(first)]
    }
}

/// Iterator adapter turning physical lines into [`LogicalLine`]s.
pub struct LogicalLines<I> {
    lines: I,
}

impl<I> LogicalLines<I> {
    pub fn new(lines: I) -> Self {
        LogicalLines { lines }
    }
}

/// Splits decoded content into physical lines and assembles them. Interior
/// CRs of CRLF input stay in `raw` but are dropped from the logical text.
pub fn logical_lines(content: &str) -> LogicalLines<impl Iterator<Item = String> + '_> {
    LogicalLines::new(content.split_terminator('\n').map(str::to_owned))
}

fn logical_text(physical: &str) -> &str {
    strip_leading_spaces(physical.strip_suffix('\r').unwrap_or(physical))
}

impl<I: Iterator<Item = String>> Iterator for LogicalLines<I> {
    type Item = LogicalLine;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.lines.next()?;
        let stripped = logical_text(&first);

        // Comment and blank lines terminate immediately; a trailing
        // backslash on a comment is part of the comment.
        if stripped.is_empty() || stripped.starts_with('#') || stripped.starts_with('!') {
            let text = stripped.to_owned();
            return Some(LogicalLine {
                text,
                raw: vec![first],
            });
        }

        let mut text = stripped.to_owned();
        let mut raw = vec![first];
        while has_continuation_marker(&text) {
            text.pop();
            match self.lines.next() {
                // End of input while expecting a continuation: emit what
                // has been gathered.
                None => break,
                Some(next) => {
                    text.push_str(logical_text(&next));
                    raw.push(next);
                }
            }
        }

        Some(LogicalLine { text, raw })
    }
}
