#![forbid(unsafe_code)]
//! Java properties localization file codec for Rust.
//!
//! Parses the legacy properties format into an ordered [`Bundle`], writes
//! bundles back with deterministic ordering and column-limited line
//! wrapping, and merges updated values into an existing file while leaving
//! every untouched byte alone.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use propcodec::{Bundle, UpdateSet, merge_files, traits::Parser};
//!
//! // Parse a properties file into the ordered bundle model
//! let bundle = Bundle::read_from("messages.properties")?;
//! for entry in &bundle {
//!     println!("{} = {}", entry.key, entry.value);
//! }
//!
//! // Rewrite only the changed keys, preserving the file's layout
//! let mut updates = UpdateSet::new();
//! updates.insert("greeting".into(), "Bonjour".into());
//! let locale = "fr".parse()?;
//! merge_files("messages.properties", "messages_fr.properties", &updates, &locale)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Format notes
//!
//! - Streams are ISO-8859-1; non-ASCII content travels as `\uXXXX` escapes.
//! - Continuation lines are joined by backslash parity: an odd run of
//!   trailing backslashes continues, an even run is an escaped backslash.
//! - The leading comment block up to the first blank line becomes the
//!   bundle's global notes; comments directly above a key attach to it.

pub mod codec;
pub mod definition;
pub mod error;
pub mod escape;
pub mod lines;
pub mod merge;
pub mod parser;
pub mod segment;
pub mod traits;
pub mod types;
pub mod writer;

mod encoding;

// Re-export most used items for easy consumption
pub use crate::{
    definition::{COLMAX, Definition, Separator},
    error::Error,
    merge::{merge, merge_files, merge_with_segmenter},
    parser::{ParseOptions, parse_bundle},
    segment::{WhitespaceSegmenter, WordSegmenter},
    types::{Bundle, ResourceEntry, UpdateSet},
    writer::write_bundle,
};
