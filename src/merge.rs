//! Format-preserving merge: rewrite only the lines whose key changed.
//!
//! The base stream is read with the same logical-line assembly as the
//! parser, but nothing is interpreted beyond finding each definition's key.
//! Lines whose key is absent from the update set, comments, blanks, and
//! anything that fails to parse all pass through byte for byte.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use unic_langid::LanguageIdentifier;

use crate::{
    definition::Definition,
    encoding::{decode_latin1, encode_latin1},
    error::Error,
    lines::{LineKind, logical_lines},
    segment::{WhitespaceSegmenter, WordSegmenter},
    types::UpdateSet,
};

/// Merges `updates` into the base stream with the default word segmenter.
pub fn merge<R: Read, W: Write>(
    base: R,
    updates: &UpdateSet,
    locale: &LanguageIdentifier,
    out: W,
) -> Result<(), Error> {
    merge_with_segmenter(base, updates, locale, &WhitespaceSegmenter, out)
}

/// Merges `updates` into the base stream.
///
/// For every definition whose key is in `updates`, the original leading
/// whitespace is kept and the definition is re-rendered with its original
/// separator glyph and the new value. Everything else is emitted verbatim,
/// and the output ends with a newline only if the input did.
pub fn merge_with_segmenter<R: Read, W: Write>(
    base: R,
    updates: &UpdateSet,
    locale: &LanguageIdentifier,
    segmenter: &dyn WordSegmenter,
    out: W,
) -> Result<(), Error> {
    let content = decode_latin1(base)?;
    let ends_with_newline = content.ends_with('\n');

    let mut sink = LineSink::new(out);
    for logical in logical_lines(&content) {
        let rewrite = match logical.kind() {
            LineKind::Comment | LineKind::Blank => None,
            // Malformed lines are pass-through, never an error.
            LineKind::Definition => Definition::parse_line(&logical.text)
                .ok()
                .filter(|def| updates.contains_key(&def.key))
                .map(|def| {
                    Definition::new(def.key.clone(), updates[&def.key].clone(), def.separator)
                }),
        };

        match rewrite {
            Some(def) => {
                let lead = logical.leading_spaces();
                for (i, line) in def.render(locale, segmenter).into_iter().enumerate() {
                    if i == 0 {
                        sink.emit(&format!("{lead}{line}"))?;
                    } else {
                        sink.emit(&line)?;
                    }
                }
            }
            None => {
                for raw in &logical.raw {
                    sink.emit(raw)?;
                }
            }
        }
    }

    sink.finish(ends_with_newline)
}

/// Path-based convenience wrapper around [`merge`].
pub fn merge_files<P: AsRef<Path>, Q: AsRef<Path>>(
    base_path: P,
    out_path: Q,
    updates: &UpdateSet,
    locale: &LanguageIdentifier,
) -> Result<(), Error> {
    let base = BufReader::new(File::open(base_path)?);
    let out = BufWriter::new(File::create(out_path)?);
    merge(base, updates, locale, out)
}

/// Emits lines separated by `\n`, leaving the trailing-newline decision to
/// the end of the stream.
struct LineSink<W> {
    out: W,
    any: bool,
}

impl<W: Write> LineSink<W> {
    fn new(out: W) -> Self {
        LineSink { out, any: false }
    }

    fn emit(&mut self, line: &str) -> Result<(), Error> {
        if self.any {
            self.out.write_all(b"\n")?;
        }
        self.out.write_all(&encode_latin1(line))?;
        self.any = true;
        Ok(())
    }

    fn finish(mut self, trailing_newline: bool) -> Result<(), Error> {
        if self.any && trailing_newline {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
