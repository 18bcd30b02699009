//! The entry parser: properties byte stream in, ordered [`Bundle`] out.

use std::collections::HashMap;
use std::io::Read;

use crate::{
    definition::Definition,
    encoding::decode_latin1,
    error::Error,
    escape,
    lines::{LineKind, logical_lines},
    types::{Bundle, ResourceEntry},
};

/// Behavior options for [`parse_bundle`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// When set, the first definition line without a usable separator fails
    /// the whole parse. The default skips such lines and keeps going.
    pub strict: bool,
}

impl ParseOptions {
    /// Creates default (lenient) parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Tracks whether buffered comments may still become the file-global note
/// block. The window closes at the first blank line or the first definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotesState {
    GlobalCandidate,
    Closed,
}

/// Parses a properties stream into a [`Bundle`].
///
/// Comment lines buffer up as notes; a blank line while still in the leading
/// comment block turns the buffer into the bundle's global notes; otherwise
/// buffered notes attach to the next definition. A key defined twice keeps
/// its first position and sequence number, takes the last value, and takes
/// the later definition's notes only when that definition has any.
pub fn parse_bundle<R: Read>(reader: R, options: &ParseOptions) -> Result<Bundle, Error> {
    let content = decode_latin1(reader)?;

    let mut bundle = Bundle::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut current_notes: Vec<String> = Vec::new();
    let mut state = NotesState::GlobalCandidate;

    for logical in logical_lines(&content) {
        match logical.kind() {
            LineKind::Comment => {
                current_notes.push(escape::unescape(&logical.text[1..])?);
            }
            LineKind::Blank => {
                if state == NotesState::GlobalCandidate && !current_notes.is_empty() {
                    bundle.global_notes = std::mem::take(&mut current_notes);
                } else {
                    // Past the global block a blank line is just another
                    // note line.
                    current_notes.push(String::new());
                }
                state = NotesState::Closed;
            }
            LineKind::Definition => {
                state = NotesState::Closed;
                let def = match Definition::parse_line(&logical.text) {
                    Ok(def) => def,
                    Err(err @ Error::MalformedDefinition(_)) => {
                        if options.strict {
                            return Err(err);
                        }
                        // Lenient: drop the line, keep buffered notes for
                        // the next definition.
                        continue;
                    }
                    Err(err) => return Err(err),
                };
                upsert(&mut bundle, &mut index, def, &mut current_notes);
            }
        }
    }

    Ok(bundle)
}

fn upsert(
    bundle: &mut Bundle,
    index: &mut HashMap<String, usize>,
    def: Definition,
    current_notes: &mut Vec<String>,
) {
    match index.get(&def.key) {
        Some(&slot) => {
            // Last write wins on the value; position and sequence number
            // stay with the first definition.
            let entry = &mut bundle.entries[slot];
            entry.value = def.value;
            if !current_notes.is_empty() {
                entry.notes = std::mem::take(current_notes);
            }
        }
        None => {
            let sequence_number = (bundle.len() + 1) as u32;
            index.insert(def.key.clone(), bundle.len());
            bundle.add_entry(ResourceEntry {
                key: def.key,
                value: def.value,
                sequence_number,
                notes: std::mem::take(current_notes),
            });
        }
    }
}
