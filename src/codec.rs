//! High-level codec surface: the [`Parser`] wiring for [`Bundle`].
//!
//! `Bundle::from_reader` parses with lenient options, `Bundle::to_writer`
//! serializes with the default segmenter and an undetermined locale. The
//! lower-level entry points in [`crate::parser`], [`crate::writer`], and
//! [`crate::merge`] take explicit options, locales, and segmenters.

use std::io::{Read, Write};

use unic_langid::LanguageIdentifier;

use crate::{
    error::Error,
    parser::{ParseOptions, parse_bundle},
    segment::WhitespaceSegmenter,
    traits::Parser,
    types::Bundle,
    writer::write_bundle,
};

impl Parser for Bundle {
    fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        parse_bundle(reader, &ParseOptions::new())
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        write_bundle(
            self,
            writer,
            &LanguageIdentifier::default(),
            &WhitespaceSegmenter,
        )
    }
}
