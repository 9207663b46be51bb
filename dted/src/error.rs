//! Error types for the DTED library.

use thiserror::Error;

/// Errors raised by a single scalar conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The text is not a well-formed number of the expected kind.
    #[error("cannot parse {value:?} as {expected}")]
    Parse {
        value: String,
        expected: &'static str,
    },

    /// The text is well formed but outside what the converter accepts.
    #[error("{value:?} is out of domain: {reason}")]
    Domain { value: String, reason: &'static str },

    /// The field bytes are not valid UTF-8.
    #[error("field bytes are not valid UTF-8")]
    Utf8,

    /// The field's byte range reaches past the end of the buffer.
    #[error("byte range {start}..={end} exceeds buffer of {len} bytes")]
    OutOfBounds { start: usize, end: usize, len: usize },

    /// A decoded field was requested as a different type than it was decoded to.
    #[error("field holds {actual}, not {requested}")]
    WrongType {
        requested: &'static str,
        actual: &'static str,
    },

    /// A field name was looked up that the table never decoded.
    #[error("field was not decoded")]
    Missing,
}

/// Errors that can occur when decoding a DTED file.
#[derive(Error, Debug)]
pub enum DtedError {
    /// IO error when reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A block does not start with its recognition sentinel.
    #[error("Invalid {block} block identifier: expected {expected}")]
    InvalidBlockIdentifier {
        block: &'static str,
        expected: String,
    },

    /// A field's bytes could not be converted.
    #[error("Failed to decode field `{field}`: {source}")]
    FieldDecode {
        field: &'static str,
        #[source]
        source: ConversionError,
    },

    /// The buffer ends before a required region does.
    #[error("Truncated {region}: need {needed} bytes, got {actual}")]
    Truncated {
        region: &'static str,
        needed: usize,
        actual: usize,
    },
}

impl DtedError {
    pub(crate) fn field(field: &'static str, source: ConversionError) -> Self {
        DtedError::FieldDecode { field, source }
    }
}

/// Result type alias using [`DtedError`].
pub type Result<T> = std::result::Result<T, DtedError>;
