//! All error types for the propcodec crate.
//!
//! These are returned from all fallible operations (parsing, unescaping, serialization, merging).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `\uXXXX` escape sequence with fewer than four hex digits, or with
    /// non-hex characters. Carries the text that contained the bad sequence.
    #[error("malformed \\uxxxx encoding in `{0}`")]
    MalformedUnicodeEscape(String),

    /// A line that was expected to define a key/value pair but has no
    /// usable separator. Carries the offending logical line.
    #[error("no key/value separator in `{0}`")]
    MalformedDefinition(String),
}

impl Error {
    /// Creates a malformed Unicode escape error for the given input segment.
    pub fn malformed_unicode_escape(segment: impl Into<String>) -> Self {
        Error::MalformedUnicodeEscape(segment.into())
    }

    /// Creates a malformed definition error for the given logical line.
    pub fn malformed_definition(line: impl Into<String>) -> Self {
        Error::MalformedDefinition(line.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Json(json_error);
        assert!(error.to_string().contains("JSON error"));
    }

    #[test]
    fn test_malformed_unicode_escape_error() {
        let error = Error::malformed_unicode_escape("\\u12");
        assert_eq!(error.to_string(), "malformed \\uxxxx encoding in `\\u12`");
    }

    #[test]
    fn test_malformed_definition_error() {
        let error = Error::malformed_definition("no separator here");
        assert_eq!(
            error.to_string(),
            "no key/value separator in `no separator here`"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::malformed_definition("x");
        let debug = format!("{:?}", error);
        assert!(debug.contains("MalformedDefinition"));
    }
}
