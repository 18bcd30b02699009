//! A single key/value definition: separator scanning on the way in,
//! column-limited rendering on the way out.

use unic_langid::LanguageIdentifier;

use crate::{
    error::Error,
    escape::{self, EscapeSpace, is_props_space},
    lines::strip_leading_spaces,
    segment::WordSegmenter,
};

/// Output column limit for rendered definitions.
pub const COLMAX: usize = 80;

/// Continuation lines are indented this much.
const INDENT: &str = "    ";

/// The glyph dividing key from value on a definition line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Equal,
    Colon,
    Space,
}

impl Separator {
    pub fn as_char(&self) -> char {
        match self {
            Separator::Equal => '=',
            Separator::Colon => ':',
            Separator::Space => ' ',
        }
    }
}

/// One parsed (or to-be-rendered) key/value definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub key: String,
    pub value: String,
    pub separator: Separator,
}

impl Definition {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        separator: Separator,
    ) -> Self {
        Definition {
            key: key.into(),
            value: value.into(),
            separator,
        }
    }

    /// Parses one logical definition line into key, value, and separator.
    ///
    /// The first unescaped `=` or `:` wins. An unescaped space instead
    /// switches to space-seen mode, where the next non-space character
    /// settles the separator: `=` or `:` claim it, anything else means the
    /// key and value are divided by bare whitespace. A line with no
    /// separator, or a separator in the first column, is rejected with
    /// [`Error::MalformedDefinition`].
    pub fn parse_line(line: &str) -> Result<Self, Error> {
        let scan = scan_separator(line)
            .ok_or_else(|| Error::malformed_definition(line))?;

        let key = escape::unescape(line[..scan.key_end].trim())?;
        let value = escape::unescape(strip_leading_spaces(&line[scan.value_start..]))?;

        Ok(Definition {
            key,
            value,
            separator: scan.separator,
        })
    }

    /// Renders the definition as one or more output lines, wrapping the
    /// value at [`COLMAX`] columns along the segment boundaries produced by
    /// `segmenter`. Every non-final line ends with a continuation backslash;
    /// every continuation line starts with a four-space indent.
    pub fn render(
        &self,
        locale: &LanguageIdentifier,
        segmenter: &dyn WordSegmenter,
    ) -> Vec<String> {
        let escaped_key = escape::escape_key(&self.key);
        let escaped_value = escape::escape_value(&self.value);

        let lead = match self.separator {
            Separator::Space => format!("{} ", escaped_key),
            sep => format!("{} {} ", escaped_key, sep.as_char()),
        };

        if lead.len() + escaped_value.len() <= COLMAX {
            return vec![format!("{}{}", lead, escaped_value)];
        }

        let mut lines = Vec::new();
        let mut buf = lead;

        // The key and separator always share a line; if they alone overflow
        // the column limit, the value starts on a continuation line.
        if buf.len() > COLMAX {
            buf.push('\\');
            lines.push(std::mem::take(&mut buf));
            buf.push_str(INDENT);
        }

        let mut emit_next = false;
        let mut first_segment = true;
        for segment in segmenter.segment(&self.value, locale) {
            let escaped = if first_segment {
                first_segment = false;
                escape::escape(segment, EscapeSpace::LeadingOnly)
            } else {
                escape::escape(segment, EscapeSpace::None)
            };

            if emit_next || buf.len() + escaped.len() + 2 >= COLMAX {
                // A continuation line must not start with whitespace; keep
                // appending segments until one starts with a non-space.
                let breakable = escaped
                    .chars()
                    .next()
                    .is_some_and(|c| !is_props_space(c));
                if breakable {
                    buf.push('\\');
                    lines.push(std::mem::take(&mut buf));
                    buf.push_str(INDENT);
                    emit_next = false;
                }
            }
            buf.push_str(&escaped);
            if buf.len() + 2 >= COLMAX {
                // Defer the break until the next segment is known to be a
                // safe line start.
                emit_next = true;
            }
        }

        if !buf.is_empty() {
            lines.push(buf);
        }
        lines
    }
}

struct SeparatorScan {
    separator: Separator,
    key_end: usize,
    value_start: usize,
}

/// Left-to-right scan for the effective separator. Escape state is tracked
/// by backslash-run parity so `\\=` still separates while `\=` does not.
fn scan_separator(line: &str) -> Option<SeparatorScan> {
    let mut backslash_run = 0usize;
    let mut space_at: Option<usize> = None;

    for (idx, c) in line.char_indices() {
        if let Some(key_end) = space_at {
            if c == ' ' {
                continue;
            }
            let scan = match c {
                '=' => SeparatorScan {
                    separator: Separator::Equal,
                    key_end,
                    value_start: idx + 1,
                },
                ':' => SeparatorScan {
                    separator: Separator::Colon,
                    key_end,
                    value_start: idx + 1,
                },
                _ => SeparatorScan {
                    separator: Separator::Space,
                    key_end,
                    value_start: idx,
                },
            };
            return Some(scan);
        }

        let escaped = backslash_run % 2 == 1;
        if !escaped && idx > 0 {
            match c {
                '=' => {
                    return Some(SeparatorScan {
                        separator: Separator::Equal,
                        key_end: idx,
                        value_start: idx + 1,
                    });
                }
                ':' => {
                    return Some(SeparatorScan {
                        separator: Separator::Colon,
                        key_end: idx,
                        value_start: idx + 1,
                    });
                }
                ' ' => space_at = Some(idx),
                _ => {}
            }
        }

        backslash_run = if c == '\\' { backslash_run + 1 } else { 0 };
    }

    None
}
