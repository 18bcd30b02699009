//! Word-break abstraction used by the line-wrapping writer.
//!
//! Wrapping never splits inside a segment, so the segmentation policy decides
//! where a long value may break. The trait keeps that policy pluggable:
//! callers with an ICU-grade break iterator can supply their own, and tests
//! can pin down wrapping with a deterministic double.

use unic_langid::LanguageIdentifier;

/// Splits text into an ordered sequence of segments that cover the whole
/// input contiguously: concatenating the segments yields `text` again.
pub trait WordSegmenter {
    fn segment<'t>(&self, text: &'t str, locale: &LanguageIdentifier) -> Vec<&'t str>;
}

/// Default segmenter: breaks at every transition between whitespace and
/// non-whitespace, yielding alternating word and whitespace runs.
///
/// Locale-independent and deterministic. Good enough for the space-separated
/// scripts the properties format is normally used with.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSegmenter;

impl WordSegmenter for WhitespaceSegmenter {
    fn segment<'t>(&self, text: &'t str, _locale: &LanguageIdentifier) -> Vec<&'t str> {
        let mut segments = Vec::new();
        let mut start = 0;
        let mut prev_is_space: Option<bool> = None;

        for (idx, c) in text.char_indices() {
            let is_space = c.is_whitespace();
            if let Some(prev) = prev_is_space {
                if prev != is_space {
                    segments.push(&text[start..idx]);
                    start = idx;
                }
            }
            prev_is_space = Some(is_space);
        }
        if start < text.len() {
            segments.push(&text[start..]);
        }

        segments
    }
}
