//! Deterministic serialization of a whole [`Bundle`].
//!
//! Output layout: global notes as a leading comment block closed by one
//! blank line, then each entry's notes as comment lines directly above its
//! definition. Definitions are rendered by the column-limited wrapping
//! writer with the `=` separator. No timestamps, no other nondeterminism.

use std::io::Write;

use unic_langid::LanguageIdentifier;

use crate::{
    definition::{Definition, Separator},
    encoding::encode_latin1,
    error::Error,
    escape::{self, EscapeSpace},
    segment::WordSegmenter,
    types::Bundle,
};

/// Writes the bundle to `writer` as properties text.
///
/// Entries are ordered by `(sequence_number, key)`, so output is stable for
/// any bundle, including hand-built ones with colliding sequence numbers.
pub fn write_bundle<W: Write>(
    bundle: &Bundle,
    mut writer: W,
    locale: &LanguageIdentifier,
    segmenter: &dyn WordSegmenter,
) -> Result<(), Error> {
    let mut ordered: Vec<_> = bundle.iter().collect();
    ordered.sort_by(|a, b| {
        a.sequence_number
            .cmp(&b.sequence_number)
            .then_with(|| a.key.cmp(&b.key))
    });

    let mut out = String::new();

    if !bundle.global_notes.is_empty() {
        for note in &bundle.global_notes {
            push_note_line(&mut out, note);
        }
        out.push('\n');
    }

    for entry in ordered {
        for note in &entry.notes {
            push_note_line(&mut out, note);
        }
        let def = Definition::new(&entry.key, &entry.value, Separator::Equal);
        for line in def.render(locale, segmenter) {
            out.push_str(&line);
            out.push('\n');
        }
    }

    writer.write_all(&encode_latin1(&out)).map_err(Error::Io)
}

/// One comment line. Content is escaped so the parser's comment unescape
/// restores it exactly; a blank note that recorded a blank source line
/// comes back as a bare marker.
fn push_note_line(out: &mut String, note: &str) {
    out.push('#');
    out.push_str(&escape::escape(note, EscapeSpace::None));
    out.push('\n');
}
