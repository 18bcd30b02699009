//! Character-level escaping rules of the properties format.
//!
//! Keys escape every space; values escape only a leading whitespace run;
//! mid-line word segments escape no spaces at all. Unescaping accepts the
//! mnemonic sequences, `\uXXXX`, and drops the backslash from anything else
//! (octal-looking sequences are deliberately not interpreted).

use crate::error::Error;

const BACKSLASH: char = '\\';

/// Space-handling mode for [`escape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeSpace {
    /// Escape every space. Used for keys.
    All,
    /// Escape only the leading run of spaces, tabs, and form feeds. Used for
    /// whole values.
    LeadingOnly,
    /// Leave spaces alone. Used for word segments after the first when
    /// wrapping a long value.
    None,
}

/// Whitespace as the properties format defines it: space, tab, form feed.
pub(crate) fn is_props_space(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\u{0c}'
}

/// Escapes a key. Every space becomes `\ `.
pub fn escape_key(s: &str) -> String {
    escape(s, EscapeSpace::All)
}

/// Escapes a value. Only a leading whitespace run is escaped.
pub fn escape_value(s: &str) -> String {
    escape(s, EscapeSpace::LeadingOnly)
}

/// Escapes text for output under the given space-handling mode.
pub fn escape(s: &str, esc_space: EscapeSpace) -> String {
    let mut buf = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    // Leading whitespace gets its mnemonic escape so a parser will not
    // strip it back out of the value.
    if matches!(esc_space, EscapeSpace::All | EscapeSpace::LeadingOnly) {
        while let Some(&c) = chars.peek() {
            match c {
                ' ' => {
                    buf.push(BACKSLASH);
                    buf.push(' ');
                }
                '\t' => {
                    buf.push(BACKSLASH);
                    buf.push('t');
                }
                '\u{0c}' => {
                    buf.push(BACKSLASH);
                    buf.push('f');
                }
                _ => break,
            }
            chars.next();
        }
    }

    for c in chars {
        let code = c as u32;
        if code < 0x20 || code >= 0x7E {
            match c {
                '\t' => {
                    buf.push(BACKSLASH);
                    buf.push('t');
                }
                '\n' => {
                    buf.push(BACKSLASH);
                    buf.push('n');
                }
                '\u{0c}' => {
                    buf.push(BACKSLASH);
                    buf.push('f');
                }
                '\r' => {
                    buf.push(BACKSLASH);
                    buf.push('r');
                }
                _ => append_unicode_escape(&mut buf, c),
            }
        } else {
            match c {
                ' ' if esc_space == EscapeSpace::All => {
                    buf.push(BACKSLASH);
                    buf.push(c);
                }
                '#' | '!' | '=' | ':' | '\\' => {
                    buf.push(BACKSLASH);
                    buf.push(c);
                }
                _ => buf.push(c),
            }
        }
    }

    buf
}

/// Appends one `\uXXXX` escape per UTF-16 code unit of `c`, so characters
/// outside the BMP come out as a surrogate pair of escapes.
fn append_unicode_escape(buf: &mut String, c: char) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        buf.push(BACKSLASH);
        buf.push('u');
        buf.push_str(&format!("{:04X}", unit));
    }
}

/// Reverses [`escape`], consuming one backslash-introduced sequence at a time.
///
/// `\uXXXX` must carry exactly four hex digits or the call fails with
/// [`Error::MalformedUnicodeEscape`]. Surrogate pairs written as two escapes
/// are recombined; a lone surrogate decodes to U+FFFD. Any other escaped
/// character is emitted literally with the backslash dropped, and a lone
/// backslash at end of input disappears silently.
pub fn unescape(s: &str) -> Result<String, Error> {
    let mut buf = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != BACKSLASH {
            buf.push(c);
            continue;
        }
        match chars.next() {
            // Incomplete trailing escape sequence: drop the backslash.
            None => break,
            Some('t') => buf.push('\t'),
            Some('n') => buf.push('\n'),
            Some('f') => buf.push('\u{0c}'),
            Some('r') => buf.push('\r'),
            Some('u') => {
                let unit = parse_unicode_escape(&mut chars, s)?;
                if (0xD800..0xDC00).contains(&unit) {
                    // High surrogate: a following \uXXXX low surrogate
                    // completes the pair.
                    let mut lookahead = chars.clone();
                    let low = match (lookahead.next(), lookahead.next()) {
                        (Some(BACKSLASH), Some('u')) => {
                            Some(parse_unicode_escape(&mut lookahead, s)?)
                        }
                        _ => None,
                    };
                    match low {
                        Some(low) if (0xDC00..0xE000).contains(&low) => {
                            let combined = 0x10000
                                + ((unit as u32 - 0xD800) << 10)
                                + (low as u32 - 0xDC00);
                            buf.push(char::from_u32(combined).unwrap_or('\u{FFFD}'));
                            chars = lookahead;
                        }
                        _ => buf.push('\u{FFFD}'),
                    }
                } else {
                    buf.push(char::from_u32(unit as u32).unwrap_or('\u{FFFD}'));
                }
            }
            // Octal escapes are not recognized, \b is not a backspace, and
            // unknown sequences keep the character without the backslash.
            Some(other) => buf.push(other),
        }
    }

    Ok(buf)
}

/// Reads the four hex digits after `\u`. `context` is the full text being
/// unescaped, reported back on failure.
fn parse_unicode_escape(
    chars: &mut std::str::Chars<'_>,
    context: &str,
) -> Result<u16, Error> {
    let mut value: u16 = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| Error::malformed_unicode_escape(context))?;
        value = (value << 4) | digit as u16;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_key_escapes_every_space() {
        assert_eq!(escape_key("a b c"), "a\\ b\\ c");
    }

    #[test]
    fn test_escape_value_escapes_only_leading_whitespace() {
        assert_eq!(escape_value("  x y"), "\\ \\ x y");
        assert_eq!(escape_value("\t\u{0c}x y"), "\\t\\fx y");
    }

    #[test]
    fn test_escape_none_leaves_spaces_alone() {
        assert_eq!(escape(" a b ", EscapeSpace::None), " a b ");
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape("a#b!c=d:e\\f", EscapeSpace::None),
            "a\\#b\\!c\\=d\\:e\\\\f"
        );
    }

    #[test]
    fn test_escape_control_characters_use_mnemonics() {
        assert_eq!(escape("a\nb\rc\td\u{0c}e", EscapeSpace::None), "a\\nb\\rc\\td\\fe");
    }

    #[test]
    fn test_escape_uses_uppercase_padded_unicode_escapes() {
        assert_eq!(escape("\u{1}", EscapeSpace::None), "\\u0001");
        assert_eq!(escape("\u{E9}", EscapeSpace::None), "\\u00E9");
        // 0x7E itself is at the boundary and gets escaped.
        assert_eq!(escape("~", EscapeSpace::None), "\\u007E");
        assert_eq!(escape("}", EscapeSpace::None), "}");
    }

    #[test]
    fn test_escape_astral_char_emits_surrogate_pair() {
        assert_eq!(escape("\u{1F600}", EscapeSpace::None), "\\uD83D\\uDE00");
    }

    #[test]
    fn test_unescape_mnemonics() {
        assert_eq!(unescape("a\\tb\\nc\\fd\\re").unwrap(), "a\tb\nc\u{0c}d\re");
    }

    #[test]
    fn test_unescape_unicode_escape() {
        assert_eq!(unescape("\\u00E9").unwrap(), "\u{E9}");
        assert_eq!(unescape("\\u0041").unwrap(), "A");
    }

    #[test]
    fn test_unescape_recombines_surrogate_pairs() {
        assert_eq!(unescape("\\uD83D\\uDE00").unwrap(), "\u{1F600}");
    }

    #[test]
    fn test_unescape_lone_surrogate_is_replacement_char() {
        assert_eq!(unescape("\\uD83Dx").unwrap(), "\u{FFFD}x");
        assert_eq!(unescape("\\uDE00").unwrap(), "\u{FFFD}");
    }

    #[test]
    fn test_unescape_truncated_unicode_escape_fails() {
        let err = unescape("\\u12").unwrap_err();
        assert!(matches!(err, Error::MalformedUnicodeEscape(_)));
        let err = unescape("\\u12Gh").unwrap_err();
        assert!(matches!(err, Error::MalformedUnicodeEscape(_)));
    }

    #[test]
    fn test_unescape_does_not_interpret_octal() {
        assert_eq!(unescape("\\101").unwrap(), "101");
    }

    #[test]
    fn test_unescape_unknown_escape_drops_backslash() {
        assert_eq!(unescape("\\z\\b").unwrap(), "zb");
    }

    #[test]
    fn test_unescape_trailing_backslash_is_dropped() {
        assert_eq!(unescape("abc\\").unwrap(), "abc");
    }

    #[test]
    fn test_escape_value_unescape_round_trip() {
        let samples = [
            "plain",
            "  leading spaces",
            "\t\u{0c}tabs and feeds",
            "inner space kept",
            "specials # ! = : \\ here",
            "line\nbreak\r\n",
            "caf\u{E9} \u{4E16}\u{754C} \u{1F600}",
        ];
        for s in samples {
            assert_eq!(unescape(&escape_value(s)).unwrap(), s, "sample `{s}`");
        }
    }

    #[test]
    fn test_escape_key_unescape_round_trip() {
        let samples = ["simple", "with space", " lead", "a=b:c#d!e\\f"];
        for s in samples {
            assert_eq!(unescape(&escape_key(s)).unwrap(), s, "sample `{s}`");
        }
    }
}
