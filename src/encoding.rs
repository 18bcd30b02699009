//! ISO-8859-1 stream helpers.
//!
//! The properties format is defined over ISO-8859-1 bytes; anything outside
//! that repertoire travels as `\uXXXX` escapes. ISO-8859-1 maps each byte to
//! the identically numbered code point, so decoding and encoding are unit
//! mappings over the first 256 code points.

use std::io::Read;

use crate::error::Error;

/// Reads the whole stream and decodes it as ISO-8859-1.
pub(crate) fn decode_latin1<R: Read>(mut reader: R) -> Result<String, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// Encodes text as ISO-8859-1 bytes.
///
/// Code points above U+00FF are substituted with `?`, the same replacement
/// a lossy ISO-8859-1 encoder applies. The escape codec keeps everything it
/// emits below 0x7E, so writer output never hits the substitution.
pub(crate) fn encode_latin1(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_decode_maps_every_byte_to_same_code_point() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let decoded = decode_latin1(Cursor::new(bytes)).unwrap();
        for (i, c) in decoded.chars().enumerate() {
            assert_eq!(c as u32, i as u32);
        }
    }

    #[test]
    fn test_encode_round_trips_latin1_text() {
        let text = "caf\u{E9} na\u{EF}ve";
        let encoded = encode_latin1(text);
        let decoded = decode_latin1(Cursor::new(encoded)).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_encode_substitutes_unmappable_chars() {
        assert_eq!(encode_latin1("a\u{4E16}b"), b"a?b");
    }
}
